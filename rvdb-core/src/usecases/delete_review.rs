use super::prelude::*;

/// Deletes a review and returns its last state for auditing.
pub fn delete_review<R>(repo: &R, id: &str, actor: &Actor) -> Result<Review>
where
    R: ReviewRepository,
{
    let review = repo.load_review(id)?;
    if !actor.is_admin() && !(review.is_organic() && review.is_owned_by(&actor.id)) {
        return Err(Error::Forbidden);
    }
    repo.delete_review(id)?;
    Ok(review)
}
