use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

use crate::{
    db::Db,
    entities::*,
    gateways::{booking::*, directory::*},
    repositories::{Error as RepoError, *},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub reviews: RefCell<Vec<Review>>,
    pub customers: RefCell<Vec<SyntheticCustomer>>,
    pub rating_summaries: RefCell<Vec<RatingSummary>>,
    pub audit_log: RefCell<Vec<AuditEntry>>,
}

impl Db for MockDb {}

impl ReviewRepository for MockDb {
    fn create_review(&self, review: Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews.iter().any(|r| r.id == review.id) {
            return Err(RepoError::AlreadyExists);
        }
        if let (Some(booking_id), Some(customer_id)) = (&review.booking_id, &review.customer_id) {
            if reviews.iter().any(|r| {
                r.booking_id.as_ref() == Some(booking_id)
                    && r.customer_id.as_ref() == Some(customer_id)
            }) {
                return Err(RepoError::AlreadyExists);
            }
        }
        reviews.push(review);
        Ok(())
    }

    fn load_review(&self, id: &str) -> RepoResult<Review> {
        self.reviews
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_reviews_of_provider(&self, provider_id: &str) -> RepoResult<Vec<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.provider_id.as_str() == provider_id)
            .cloned()
            .collect())
    }

    fn load_review_of_booking(
        &self,
        booking_id: &str,
        customer_id: &str,
    ) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| {
                r.booking_id.as_ref().map(Id::as_str) == Some(booking_id)
                    && r.customer_id.as_ref().map(Id::as_str) == Some(customer_id)
            })
            .cloned())
    }

    fn update_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let existing = reviews
            .iter_mut()
            .find(|r| r.id == review.id)
            .ok_or(RepoError::NotFound)?;
        *existing = review.clone();
        Ok(())
    }

    fn delete_review(&self, id: &str) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let len_before = reviews.len();
        reviews.retain(|r| r.id.as_str() != id);
        if reviews.len() == len_before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn load_reviewed_provider_ids(&self) -> RepoResult<Vec<Id>> {
        let mut ids: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .map(|r| r.provider_id.clone())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}

impl CustomerRepository for MockDb {
    fn create_synthetic_customer(&self, customer: SyntheticCustomer) -> RepoResult<()> {
        let mut customers = self.customers.borrow_mut();
        if customers.iter().any(|c| c.id == customer.id) {
            return Err(RepoError::AlreadyExists);
        }
        customers.push(customer);
        Ok(())
    }

    fn find_synthetic_customer_by_first_name(
        &self,
        first_name: &str,
    ) -> RepoResult<Option<SyntheticCustomer>> {
        Ok(self
            .customers
            .borrow()
            .iter()
            .find(|c| c.is_synthetic() && c.first_name == first_name)
            .cloned())
    }
}

impl RatingSummaryRepository for MockDb {
    fn replace_rating_summary(&self, summary: RatingSummary) -> RepoResult<()> {
        let mut summaries = self.rating_summaries.borrow_mut();
        summaries.retain(|s| s.provider_id != summary.provider_id);
        summaries.push(summary);
        Ok(())
    }

    fn load_rating_summary(&self, provider_id: &str) -> RepoResult<Option<RatingSummary>> {
        Ok(self
            .rating_summaries
            .borrow()
            .iter()
            .find(|s| s.provider_id.as_str() == provider_id)
            .cloned())
    }

    fn load_summarized_provider_ids(&self) -> RepoResult<Vec<Id>> {
        Ok(self
            .rating_summaries
            .borrow()
            .iter()
            .map(|s| s.provider_id.clone())
            .collect())
    }
}

impl AuditLogRepository for MockDb {
    fn append_audit_entry(&self, entry: AuditEntry) -> RepoResult<()> {
        self.audit_log.borrow_mut().push(entry);
        Ok(())
    }

    fn load_audit_entries_of_review(&self, review_id: &str) -> RepoResult<Vec<AuditEntry>> {
        Ok(self
            .audit_log
            .borrow()
            .iter()
            .filter(|e| e.review_id.as_ref().map(Id::as_str) == Some(review_id))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MockBookings {
    pub bookings: HashMap<Id, Booking>,
}

impl MockBookings {
    pub fn with(bookings: impl IntoIterator<Item = Booking>) -> Self {
        Self {
            bookings: bookings
                .into_iter()
                .map(|b| (b.id.clone(), b))
                .collect(),
        }
    }
}

impl BookingGateway for MockBookings {
    fn get_booking(&self, id: &Id) -> Option<Booking> {
        self.bookings.get(id).cloned()
    }
}

#[derive(Default)]
pub struct MockDirectory {
    pub providers: HashSet<Id>,
}

impl MockDirectory {
    pub fn with<'a>(provider_ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            providers: provider_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProviderDirectory for MockDirectory {
    fn is_rateable_provider(&self, id: &Id) -> bool {
        self.providers.contains(id)
    }
}
