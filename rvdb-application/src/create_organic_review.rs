use super::*;

pub fn create_organic_review(
    connections: &sqlite::Connections,
    bookings: &dyn BookingGateway,
    new_review: usecases::NewOrganicReview,
) -> Result<Review> {
    let mut connection = connections.exclusive()?;
    let review = connection.transaction(|conn| {
        let storable = usecases::prepare_organic_review(conn, bookings, new_review)?;
        let review = usecases::store_new_review(conn, storable)?;
        usecases::refresh_rating_summary(conn, &review.provider_id)?;
        Ok::<_, usecases::Error>(review)
    })?;
    debug!(
        "Created review {} for provider {}",
        review.id, review.provider_id
    );
    Ok(review)
}
