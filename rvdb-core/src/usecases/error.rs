use crate::repositories;
use thiserror::Error;

use super::can_review::IneligibilityReason;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid display name")]
    DisplayName,
    #[error("The provider does not exist or cannot be rated")]
    Provider,
    #[error("The booking has already been reviewed")]
    Duplicate,
    #[error("Not eligible to review this booking: {0}")]
    NotEligible(IneligibilityReason),
    #[error("This is not allowed")]
    Forbidden,
    // An inconsistent summary is worse than a rejected write, so a failed
    // recompute fails the entire mutation.
    #[error("Failed to recompute the rating summary")]
    Aggregation(#[source] repositories::Error),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
