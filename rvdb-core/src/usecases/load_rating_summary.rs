use super::prelude::*;

/// The provider's current rating summary; the empty summary if the
/// provider has never been rated.
pub fn load_rating_summary<R>(repo: &R, provider_id: &Id) -> Result<RatingSummary>
where
    R: RatingSummaryRepository,
{
    Ok(repo
        .load_rating_summary(provider_id.as_ref())?
        .unwrap_or_else(|| RatingSummary::empty(provider_id.clone())))
}
