use super::prelude::*;

/// Partial update of a review. `None` leaves a field untouched.
#[derive(Debug, Default, Clone)]
pub struct ReviewPatch {
    pub rating: Option<RatingValue>,
    pub comment: Option<String>,
    pub admin_notes: Option<String>,
    pub visibility: Option<Visibility>,
}

/// The persisted transition of a review mutation.
#[derive(Debug, Clone)]
pub struct ReviewUpdate {
    pub before: Review,
    pub after: Review,
}

impl ReviewUpdate {
    /// True if the mutation changed what the rating summary is derived
    /// from.
    pub fn affects_rating_summary(&self) -> bool {
        self.before.rating != self.after.rating
            || self.before.visibility != self.after.visibility
    }
}

pub fn update_review<R>(
    repo: &R,
    id: &str,
    patch: ReviewPatch,
    actor: &Actor,
) -> Result<ReviewUpdate>
where
    R: ReviewRepository,
{
    if let Some(rating) = patch.rating {
        if !rating.is_valid() {
            return Err(Error::RatingValue);
        }
    }
    let before = repo.load_review(id)?;
    check_patch_permitted(&before, actor, &patch)?;
    let mut after = before.clone();
    if let Some(rating) = patch.rating {
        after.rating = rating;
    }
    if let Some(comment) = patch.comment {
        after.comment = Some(comment);
    }
    if let Some(admin_notes) = patch.admin_notes {
        after.admin_notes = Some(admin_notes);
    }
    if let Some(visibility) = patch.visibility {
        after.visibility = visibility;
    }
    after.updated_at = Timestamp::now();
    repo.update_review(&after)?;
    Ok(ReviewUpdate { before, after })
}

fn check_patch_permitted(review: &Review, actor: &Actor, patch: &ReviewPatch) -> Result<()> {
    if actor.is_admin() {
        // Admins must not silently rewrite a customer's own rating or
        // comment; organic reviews only expose their moderation state.
        if review.is_organic()
            && (patch.rating.is_some()
                || patch.comment.is_some()
                || patch.admin_notes.is_some())
        {
            return Err(Error::Forbidden);
        }
        return Ok(());
    }
    if review.is_admin_created || !review.is_owned_by(&actor.id) {
        return Err(Error::Forbidden);
    }
    // Moderation fields are off-limits for customers.
    if patch.admin_notes.is_some() || patch.visibility.is_some() {
        return Err(Error::Forbidden);
    }
    Ok(())
}
