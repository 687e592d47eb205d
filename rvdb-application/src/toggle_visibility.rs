use super::*;

pub fn toggle_visibility(
    connections: &sqlite::Connections,
    id: &str,
    actor: &usecases::Actor,
    reason: Option<String>,
) -> Result<Visibility> {
    let mut connection = connections.exclusive()?;
    let update = connection.transaction(|conn| {
        let update = usecases::toggle_visibility(conn, id, actor)?;
        usecases::refresh_rating_summary(conn, &update.after.provider_id)?;
        Ok::<_, usecases::Error>(update)
    })?;
    // Only admins get this far; the use case rejects everyone else.
    audit_trail::record(
        &connection,
        audit_trail::entry(
            AuditAction::ToggleVisibility,
            actor.id.clone(),
            Some(update.after.id.clone()),
            Some(update.before),
            Some(update.after.clone()),
            reason,
        ),
    );
    Ok(update.after.visibility)
}
