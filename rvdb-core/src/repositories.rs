// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ReviewRepository {
    fn create_review(&self, review: Review) -> Result<()>;

    fn load_review(&self, id: &str) -> Result<Review>;
    fn load_reviews_of_provider(&self, provider_id: &str) -> Result<Vec<Review>>;

    /// The organic review of a booking, if the given customer has already
    /// written one.
    fn load_review_of_booking(
        &self,
        booking_id: &str,
        customer_id: &str,
    ) -> Result<Option<Review>>;

    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, id: &str) -> Result<()>;

    /// Distinct providers that currently have at least one review.
    fn load_reviewed_provider_ids(&self) -> Result<Vec<Id>>;
}

pub trait CustomerRepository {
    fn create_synthetic_customer(&self, customer: SyntheticCustomer) -> Result<()>;

    /// Exact, case-sensitive first-name lookup among synthetic customers.
    fn find_synthetic_customer_by_first_name(
        &self,
        first_name: &str,
    ) -> Result<Option<SyntheticCustomer>>;
}

pub trait RatingSummaryRepository {
    /// Replaces the provider's cached summary wholesale.
    ///
    /// The summary row is owned exclusively by the aggregation use case
    /// and must never be patched incrementally.
    fn replace_rating_summary(&self, summary: RatingSummary) -> Result<()>;

    fn load_rating_summary(&self, provider_id: &str) -> Result<Option<RatingSummary>>;

    /// Distinct providers that currently have a cached summary.
    fn load_summarized_provider_ids(&self) -> Result<Vec<Id>>;
}

pub trait AuditLogRepository {
    // Append-only: entries are never updated or deleted.
    fn append_audit_entry(&self, entry: AuditEntry) -> Result<()>;

    /// Entries remain retrievable after the referenced review is gone.
    fn load_audit_entries_of_review(&self, review_id: &str) -> Result<Vec<AuditEntry>>;
}
