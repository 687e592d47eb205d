use crate::repositories::*;

pub trait Db:
    ReviewRepository + CustomerRepository + RatingSummaryRepository + AuditLogRepository
{
}
