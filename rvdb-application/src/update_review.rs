use super::*;

pub fn update_review(
    connections: &sqlite::Connections,
    id: &str,
    patch: usecases::ReviewPatch,
    actor: &usecases::Actor,
    reason: Option<String>,
) -> Result<Review> {
    let mut connection = connections.exclusive()?;
    let update = connection.transaction(|conn| {
        let update = usecases::update_review(conn, id, patch, actor)?;
        if update.affects_rating_summary() {
            usecases::refresh_rating_summary(conn, &update.after.provider_id)?;
        }
        Ok::<_, usecases::Error>(update)
    })?;
    if actor.is_admin() {
        audit_trail::record(
            &connection,
            audit_trail::entry(
                AuditAction::Update,
                actor.id.clone(),
                Some(update.after.id.clone()),
                Some(update.before),
                Some(update.after.clone()),
                reason,
            ),
        );
    }
    Ok(update.after)
}
