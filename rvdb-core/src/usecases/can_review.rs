use thiserror::Error;

use super::prelude::*;

/// Why a customer may not review a booking right now.
///
/// The variant names double as the machine-readable reason codes exposed
/// to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IneligibilityReason {
    #[error("booking_not_found")]
    BookingNotFound,
    #[error("not_completed")]
    NotCompleted,
    #[error("no_provider_assigned")]
    NoProviderAssigned,
    #[error("already_reviewed")]
    AlreadyReviewed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eligibility {
    pub eligible: bool,
    pub reason: Option<IneligibilityReason>,
}

impl Eligibility {
    pub const fn granted() -> Self {
        Self {
            eligible: true,
            reason: None,
        }
    }

    pub const fn rejected(reason: IneligibilityReason) -> Self {
        Self {
            eligible: false,
            reason: Some(reason),
        }
    }
}

/// Tells a caller whether the customer can currently review the booking.
///
/// A pure read without side effects.
pub fn evaluate_review_eligibility<R>(
    repo: &R,
    bookings: &dyn BookingGateway,
    customer_id: &Id,
    booking_id: &Id,
) -> Result<Eligibility>
where
    R: ReviewRepository,
{
    Ok(
        match eligible_booking(repo, bookings, customer_id, booking_id)? {
            Ok(_) => Eligibility::granted(),
            Err(reason) => Eligibility::rejected(reason),
        },
    )
}

/// The booking the customer may review, or the reason why there is none.
pub(super) fn eligible_booking<R>(
    repo: &R,
    bookings: &dyn BookingGateway,
    customer_id: &Id,
    booking_id: &Id,
) -> Result<std::result::Result<Booking, IneligibilityReason>>
where
    R: ReviewRepository,
{
    use IneligibilityReason::*;
    let Some(booking) = bookings.get_booking(booking_id) else {
        return Ok(Err(BookingNotFound));
    };
    // Foreign bookings are reported as missing to avoid leaking their
    // existence.
    if booking.customer_id != *customer_id {
        return Ok(Err(BookingNotFound));
    }
    if !booking.status.is_completed() {
        return Ok(Err(NotCompleted));
    }
    if booking.provider_id.is_none() {
        return Ok(Err(NoProviderAssigned));
    }
    if repo
        .load_review_of_booking(booking_id.as_str(), customer_id.as_str())?
        .is_some()
    {
        return Ok(Err(AlreadyReviewed));
    }
    Ok(Ok(booking))
}

#[cfg(test)]
mod tests {
    use super::super::tests::{MockBookings, MockDb};
    use super::*;
    use rvdb_entities::builders::*;

    #[test]
    fn missing_booking_is_not_eligible() {
        let db = MockDb::default();
        let bookings = MockBookings::default();
        let eligibility =
            evaluate_review_eligibility(&db, &bookings, &"customer".into(), &"booking".into())
                .unwrap();
        assert_eq!(
            Eligibility::rejected(IneligibilityReason::BookingNotFound),
            eligibility
        );
    }

    #[test]
    fn foreign_booking_is_reported_as_missing() {
        let db = MockDb::default();
        let bookings = MockBookings::with([Booking::build()
            .id("booking")
            .customer("somebody-else")
            .finish()]);
        let eligibility =
            evaluate_review_eligibility(&db, &bookings, &"customer".into(), &"booking".into())
                .unwrap();
        assert_eq!(
            Eligibility::rejected(IneligibilityReason::BookingNotFound),
            eligibility
        );
    }

    #[test]
    fn confirmed_booking_is_not_completed() {
        let db = MockDb::default();
        let bookings = MockBookings::with([Booking::build()
            .id("booking")
            .customer("customer")
            .status(BookingStatus::Confirmed)
            .finish()]);
        let eligibility =
            evaluate_review_eligibility(&db, &bookings, &"customer".into(), &"booking".into())
                .unwrap();
        assert_eq!(
            Eligibility::rejected(IneligibilityReason::NotCompleted),
            eligibility
        );
    }

    #[test]
    fn booking_without_provider_is_not_eligible() {
        let db = MockDb::default();
        let bookings = MockBookings::with([Booking::build()
            .id("booking")
            .customer("customer")
            .no_provider()
            .finish()]);
        let eligibility =
            evaluate_review_eligibility(&db, &bookings, &"customer".into(), &"booking".into())
                .unwrap();
        assert_eq!(
            Eligibility::rejected(IneligibilityReason::NoProviderAssigned),
            eligibility
        );
    }

    #[test]
    fn fresh_completed_booking_is_eligible() {
        let db = MockDb::default();
        let bookings = MockBookings::with([Booking::build()
            .id("booking")
            .customer("customer")
            .provider("provider")
            .finish()]);
        let eligibility =
            evaluate_review_eligibility(&db, &bookings, &"customer".into(), &"booking".into())
                .unwrap();
        assert_eq!(Eligibility::granted(), eligibility);
    }

    #[test]
    fn reviewed_booking_is_not_eligible_again() {
        let db = MockDb::default();
        db.reviews.borrow_mut().push(
            Review::build()
                .booking("booking", "customer")
                .provider("provider")
                .finish(),
        );
        let bookings = MockBookings::with([Booking::build()
            .id("booking")
            .customer("customer")
            .provider("provider")
            .finish()]);
        let eligibility =
            evaluate_review_eligibility(&db, &bookings, &"customer".into(), &"booking".into())
                .unwrap();
        assert_eq!(
            Eligibility::rejected(IneligibilityReason::AlreadyReviewed),
            eligibility
        );
    }
}
