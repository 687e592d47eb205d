use crate::entities::*;

/// Computes a provider's rating summary from its current review set.
///
/// Hidden reviews are excluded. The result is always a recomputation from
/// scratch, never a delta applied to a previous summary.
pub fn summarize_reviews(provider_id: &Id, reviews: &[Review]) -> RatingSummary {
    debug_assert_eq!(
        reviews.len(),
        reviews
            .iter()
            .filter(|r| r.provider_id == *provider_id)
            .count()
    );
    reviews
        .iter()
        .filter(|r| r.visibility.is_visible())
        .fold(
            RatingSummaryBuilder::new(provider_id.clone()),
            |mut acc, r| {
                acc.add(r.rating);
                acc
            },
        )
        .build()
}
