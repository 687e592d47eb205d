use super::prelude::*;

/// All audit entries referencing a review, oldest first.
///
/// Entries outlive the review they describe.
pub fn load_audit_trail<R>(repo: &R, review_id: &str) -> Result<Vec<AuditEntry>>
where
    R: AuditLogRepository,
{
    Ok(repo.load_audit_entries_of_review(review_id)?)
}
