use super::prelude::*;
use crate::rating::summarize_reviews;

/// Recomputes and replaces the provider's rating summary from the current
/// review set.
///
/// Must run inside the same transaction as the triggering mutation so
/// that the summary can never drift from its source set.
pub fn refresh_rating_summary<R>(repo: &R, provider_id: &Id) -> Result<RatingSummary>
where
    R: ReviewRepository + RatingSummaryRepository,
{
    let reviews = repo
        .load_reviews_of_provider(provider_id.as_ref())
        .map_err(Error::Aggregation)?;
    let summary = summarize_reviews(provider_id, &reviews);
    debug_assert_eq!(summary.review_count, summary.histogram.total());
    repo.replace_rating_summary(summary.clone())
        .map_err(Error::Aggregation)?;
    Ok(summary)
}
