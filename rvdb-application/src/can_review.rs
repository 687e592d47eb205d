use super::*;

/// Read-only eligibility check consumed by the booking collaborator.
pub fn can_review(
    connections: &sqlite::Connections,
    bookings: &dyn BookingGateway,
    customer_id: &Id,
    booking_id: &Id,
) -> Result<usecases::Eligibility> {
    let connection = connections.shared()?;
    Ok(usecases::evaluate_review_eligibility(
        &connection,
        bookings,
        customer_id,
        booking_id,
    )?)
}
