use super::prelude::*;

/// Maps a free-text display name to a stable synthetic customer identity.
///
/// Matches on the first name only, case-sensitive. This is a best-effort
/// convenience lookup, not a strict identity system: two distinct
/// reviewers sharing a first name are merged.
pub fn resolve_reviewer<R>(repo: &R, display_name: &str) -> Result<Id>
where
    R: CustomerRepository,
{
    let name = DisplayName::parse(display_name).ok_or(Error::DisplayName)?;
    if let Some(existing) = repo.find_synthetic_customer_by_first_name(&name.first_name)? {
        debug_assert!(existing.is_synthetic());
        return Ok(existing.id);
    }
    let id = Id::new();
    let now = Timestamp::now();
    let placeholder_contact = placeholder_contact(now);
    repo.create_synthetic_customer(SyntheticCustomer {
        id: id.clone(),
        first_name: name.first_name,
        last_name: name.last_name,
        marker: SYNTHETIC_MARKER.into(),
        placeholder_contact,
        is_active: false,
        created_at: now,
    })?;
    Ok(id)
}

// Timestamp plus random component keeps the identifier collision-free
// without coordinating with any other identity source.
fn placeholder_contact(now: Timestamp) -> String {
    let nonce = Id::new();
    format!(
        "reviewer-{}-{}@placeholder.invalid",
        now.as_millis(),
        &nonce.as_str()[..8]
    )
}
