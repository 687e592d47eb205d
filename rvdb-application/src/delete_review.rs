use super::*;

pub fn delete_review(
    connections: &sqlite::Connections,
    id: &str,
    actor: &usecases::Actor,
    reason: Option<String>,
) -> Result<()> {
    let mut connection = connections.exclusive()?;
    let deleted = connection.transaction(|conn| {
        let deleted = usecases::delete_review(conn, id, actor)?;
        usecases::refresh_rating_summary(conn, &deleted.provider_id)?;
        Ok::<_, usecases::Error>(deleted)
    })?;
    debug!(
        "Deleted review {} of provider {}",
        deleted.id, deleted.provider_id
    );
    if actor.is_admin() {
        audit_trail::record(
            &connection,
            audit_trail::entry(
                AuditAction::Delete,
                actor.id.clone(),
                Some(deleted.id.clone()),
                Some(deleted),
                None,
                reason,
            ),
        );
    }
    Ok(())
}
