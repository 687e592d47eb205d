use rvdb_core::repositories::AuditLogRepository;

use super::*;

pub(crate) fn entry(
    action: AuditAction,
    actor_id: Id,
    review_id: Option<Id>,
    before: Option<Review>,
    after: Option<Review>,
    reason: Option<String>,
) -> AuditEntry {
    AuditEntry {
        id: Id::new(),
        review_id,
        actor_id,
        action,
        before,
        after,
        reason,
        created_at: Timestamp::now(),
    }
}

/// Appends an audit entry after the primary mutation has been committed.
///
/// Audit logging is best-effort: a failed append is logged locally and
/// never surfaced to the caller.
pub(crate) fn record<R>(repo: &R, entry: AuditEntry)
where
    R: AuditLogRepository,
{
    let action = entry.action;
    let review_id = entry.review_id.clone();
    if let Err(err) = repo.append_audit_entry(entry) {
        warn!("Failed to record audit entry ({action} on review {review_id:?}): {err}");
    }
}
