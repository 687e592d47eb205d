use super::*;

pub fn create_admin_review(
    connections: &sqlite::Connections,
    directory: &dyn ProviderDirectory,
    new_review: usecases::NewAdminReview,
) -> Result<Review> {
    let admin_id = new_review.admin_id.clone();
    let mut connection = connections.exclusive()?;
    let review = connection.transaction(|conn| {
        let storable = usecases::prepare_admin_review(conn, directory, new_review)?;
        let review = usecases::store_new_review(conn, storable)?;
        usecases::refresh_rating_summary(conn, &review.provider_id)?;
        Ok::<_, usecases::Error>(review)
    })?;
    audit_trail::record(
        &connection,
        audit_trail::entry(
            AuditAction::Create,
            admin_id,
            Some(review.id.clone()),
            None,
            Some(review.clone()),
            None,
        ),
    );
    Ok(review)
}
