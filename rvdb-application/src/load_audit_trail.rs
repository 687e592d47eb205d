use super::*;

pub fn load_audit_trail(
    connections: &sqlite::Connections,
    review_id: &str,
) -> Result<Vec<AuditEntry>> {
    let connection = connections.shared()?;
    Ok(usecases::load_audit_trail(&connection, review_id)?)
}
