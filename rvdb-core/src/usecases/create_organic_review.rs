use super::{can_review::*, prelude::*};

#[derive(Debug, Clone)]
pub struct NewOrganicReview {
    pub booking_id: Id,
    pub customer_id: Id,
    pub rating: RatingValue,
    pub comment: Option<String>,
}

/// A fully validated review, ready to be persisted.
#[derive(Debug, Clone)]
pub struct Storable(Review);

impl Storable {
    pub(super) fn new(review: Review) -> Self {
        Self(review)
    }

    pub fn review_id(&self) -> &str {
        self.0.id.as_ref()
    }

    pub fn provider_id(&self) -> &str {
        self.0.provider_id.as_ref()
    }
}

pub fn prepare_organic_review<R>(
    repo: &R,
    bookings: &dyn BookingGateway,
    r: NewOrganicReview,
) -> Result<Storable>
where
    R: ReviewRepository,
{
    if !r.rating.is_valid() {
        return Err(Error::RatingValue);
    }
    let booking = match eligible_booking(repo, bookings, &r.customer_id, &r.booking_id)? {
        Ok(booking) => booking,
        Err(IneligibilityReason::AlreadyReviewed) => return Err(Error::Duplicate),
        Err(reason) => return Err(Error::NotEligible(reason)),
    };
    // Eligibility guarantees an assigned provider.
    let provider_id = booking
        .provider_id
        .ok_or(Error::NotEligible(IneligibilityReason::NoProviderAssigned))?;
    let now = Timestamp::now();
    Ok(Storable(Review {
        id: Id::new(),
        booking_id: Some(r.booking_id),
        customer_id: Some(r.customer_id),
        provider_id,
        rating: r.rating,
        comment: r.comment,
        is_admin_created: false,
        admin_created_by: None,
        admin_notes: None,
        visibility: Visibility::default(),
        is_verified: true,
        created_at: now,
        updated_at: now,
    }))
}

pub fn store_new_review<R>(repo: &R, s: Storable) -> Result<Review>
where
    R: ReviewRepository,
{
    let Storable(review) = s;
    repo.create_review(review.clone())?;
    Ok(review)
}
