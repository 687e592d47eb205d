use super::{prelude::*, update_review::ReviewUpdate};

/// Flips the moderation visibility of a review. Admin-only.
pub fn toggle_visibility<R>(repo: &R, id: &str, actor: &Actor) -> Result<ReviewUpdate>
where
    R: ReviewRepository,
{
    if !actor.is_admin() {
        return Err(Error::Forbidden);
    }
    let before = repo.load_review(id)?;
    let mut after = before.clone();
    after.visibility = before.visibility.toggled();
    after.updated_at = Timestamp::now();
    repo.update_review(&after)?;
    log::info!(
        "Toggled visibility of review {} to {:?}",
        after.id,
        after.visibility
    );
    Ok(ReviewUpdate { before, after })
}
