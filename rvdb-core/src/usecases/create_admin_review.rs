use super::{create_organic_review::Storable, prelude::*, resolve_reviewer::*};

#[derive(Debug, Clone)]
pub struct NewAdminReview {
    pub provider_id: Id,
    pub rating: RatingValue,
    pub comment: Option<String>,
    /// Optional attribution; resolved to a synthetic customer identity.
    pub display_name: Option<String>,
    pub admin_id: Id,
    pub admin_notes: Option<String>,
}

pub fn prepare_admin_review<R>(
    repo: &R,
    directory: &dyn ProviderDirectory,
    r: NewAdminReview,
) -> Result<Storable>
where
    R: CustomerRepository,
{
    if !r.rating.is_valid() {
        return Err(Error::RatingValue);
    }
    if !directory.is_rateable_provider(&r.provider_id) {
        return Err(Error::Provider);
    }
    let customer_id = r
        .display_name
        .as_deref()
        .map(|name| resolve_reviewer(repo, name))
        .transpose()?;
    let now = Timestamp::now();
    Ok(Storable::new(Review {
        id: Id::new(),
        booking_id: None,
        customer_id,
        provider_id: r.provider_id,
        rating: r.rating,
        comment: r.comment,
        is_admin_created: true,
        admin_created_by: Some(r.admin_id),
        admin_notes: r.admin_notes,
        visibility: Visibility::default(),
        is_verified: true,
        created_at: now,
        updated_at: now,
    }))
}
