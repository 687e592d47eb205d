use rvdb_core::repositories::{RatingSummaryRepository as _, ReviewRepository as _};

use super::*;

/// Re-derives every provider's rating summary from the review store.
///
/// Maintenance operation; the per-mutation recompute keeps summaries
/// consistent on its own.
pub fn recompute_rating_summaries(connections: &sqlite::Connections) -> Result<usize> {
    let mut connection = connections.exclusive()?;
    let count = connection.transaction(|conn| {
        let mut provider_ids = conn.load_reviewed_provider_ids()?;
        provider_ids.extend(conn.load_summarized_provider_ids()?);
        provider_ids.sort_unstable();
        provider_ids.dedup();
        for provider_id in &provider_ids {
            usecases::refresh_rating_summary(conn, provider_id)?;
        }
        Ok::<_, usecases::Error>(provider_ids.len())
    })?;
    info!("Recomputed the rating summaries of {count} providers");
    Ok(count)
}
