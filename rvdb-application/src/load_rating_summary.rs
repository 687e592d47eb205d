use super::*;

pub fn load_rating_summary(
    connections: &sqlite::Connections,
    provider_id: &Id,
) -> Result<RatingSummary> {
    let connection = connections.shared()?;
    Ok(usecases::load_rating_summary(&connection, provider_id)?)
}
