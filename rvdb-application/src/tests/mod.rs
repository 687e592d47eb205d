pub mod prelude {

    use std::collections::{HashMap, HashSet};

    pub use rvdb_core::{
        entities::*,
        gateways::{booking::*, directory::*},
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use rvdb_entities::builders::*;

    pub mod sqlite {
        pub use rvdb_db_sqlite::Connections;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    #[derive(Default)]
    pub struct Bookings(HashMap<Id, Booking>);

    impl Bookings {
        pub fn with(bookings: impl IntoIterator<Item = Booking>) -> Self {
            Self(
                bookings
                    .into_iter()
                    .map(|b| (b.id.clone(), b))
                    .collect(),
            )
        }
    }

    impl BookingGateway for Bookings {
        fn get_booking(&self, id: &Id) -> Option<Booking> {
            self.0.get(id).cloned()
        }
    }

    #[derive(Default)]
    pub struct Directory(HashSet<Id>);

    impl Directory {
        pub fn with<'a>(provider_ids: impl IntoIterator<Item = &'a str>) -> Self {
            Self(provider_ids.into_iter().map(Into::into).collect())
        }
    }

    impl ProviderDirectory for Directory {
        fn is_rateable_provider(&self, id: &Id) -> bool {
            self.0.contains(id)
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            rvdb_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            );
            Self { db_connections }
        }

        pub fn create_organic_review(
            &self,
            bookings: &Bookings,
            booking_id: &str,
            customer_id: &str,
            rating: i8,
        ) -> Review {
            flows::create_organic_review(
                &self.db_connections,
                bookings,
                usecases::NewOrganicReview {
                    booking_id: booking_id.into(),
                    customer_id: customer_id.into(),
                    rating: rating.into(),
                    comment: Some("test comment".into()),
                },
            )
            .unwrap()
        }

        pub fn create_admin_review(
            &self,
            directory: &Directory,
            provider_id: &str,
            rating: i8,
            display_name: Option<&str>,
        ) -> Review {
            flows::create_admin_review(
                &self.db_connections,
                directory,
                usecases::NewAdminReview {
                    provider_id: provider_id.into(),
                    rating: rating.into(),
                    comment: None,
                    display_name: display_name.map(Into::into),
                    admin_id: "admin".into(),
                    admin_notes: None,
                },
            )
            .unwrap()
        }

        pub fn rating_summary(&self, provider_id: &str) -> RatingSummary {
            flows::load_rating_summary(&self.db_connections, &provider_id.into()).unwrap()
        }
    }

    pub fn completed_booking(id: &str, customer_id: &str, provider_id: &str) -> Booking {
        Booking::build()
            .id(id)
            .customer(customer_id)
            .provider(provider_id)
            .status(BookingStatus::Completed)
            .finish()
    }
}

use prelude::*;

#[test]
fn unrated_provider_has_empty_summary() {
    let fixture = BackendFixture::new();
    let summary = fixture.rating_summary("provider-x");
    assert_eq!(AvgRatingValue::from(0.0), summary.average);
    assert_eq!(0, summary.review_count);
    for (_, count) in summary.histogram.counts() {
        assert_eq!(0, count);
    }
}

#[test]
fn organic_review_updates_summary() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([completed_booking("booking-1", "customer-1", "provider-x")]);

    let review = fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);
    assert!(review.is_verified);

    let summary = fixture.rating_summary("provider-x");
    assert_eq!(AvgRatingValue::from(5.0), summary.average);
    assert_eq!(1, summary.review_count);
    assert_eq!(1, summary.histogram.count(RatingValue::new(5)));
    assert_eq!(summary.review_count, summary.histogram.total());
}

#[test]
fn second_review_of_same_booking_is_rejected() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([completed_booking("booking-1", "customer-1", "provider-x")]);
    fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);

    let err = flows::create_organic_review(
        &fixture.db_connections,
        &bookings,
        usecases::NewOrganicReview {
            booking_id: "booking-1".into(),
            customer_id: "customer-1".into(),
            rating: 4.into(),
            comment: None,
        },
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        AppError::Business(BError::Usecase(usecases::Error::Duplicate))
    ));

    // The summary still reflects a single review.
    assert_eq!(1, fixture.rating_summary("provider-x").review_count);
}

#[test]
fn eligibility_follows_booking_and_review_state() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([
        completed_booking("booking-1", "customer-1", "provider-x"),
        Booking::build()
            .id("booking-2")
            .customer("customer-1")
            .provider("provider-x")
            .status(BookingStatus::Confirmed)
            .finish(),
    ]);

    let fresh = flows::can_review(
        &fixture.db_connections,
        &bookings,
        &"customer-1".into(),
        &"booking-1".into(),
    )
    .unwrap();
    assert!(fresh.eligible);
    assert_eq!(None, fresh.reason);

    let unfinished = flows::can_review(
        &fixture.db_connections,
        &bookings,
        &"customer-1".into(),
        &"booking-2".into(),
    )
    .unwrap();
    assert_eq!(
        Some(usecases::IneligibilityReason::NotCompleted),
        unfinished.reason
    );

    fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);
    let reviewed = flows::can_review(
        &fixture.db_connections,
        &bookings,
        &"customer-1".into(),
        &"booking-1".into(),
    )
    .unwrap();
    assert!(!reviewed.eligible);
    assert_eq!(
        Some(usecases::IneligibilityReason::AlreadyReviewed),
        reviewed.reason
    );
}

#[test]
fn admin_reviews_share_a_synthetic_reviewer_per_first_name() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([completed_booking("booking-1", "customer-1", "provider-x")]);
    let directory = Directory::with(["provider-x"]);

    fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);
    let first = fixture.create_admin_review(&directory, "provider-x", 3, Some("Jane Doe"));

    let summary = fixture.rating_summary("provider-x");
    assert_eq!(AvgRatingValue::from(4.0), summary.average);
    assert_eq!(2, summary.review_count);

    let second = fixture.create_admin_review(&directory, "provider-x", 4, Some("Jane Smith"));
    // "Jane" is reused; no second synthetic customer appears.
    assert_eq!(first.customer_id, second.customer_id);

    let connection = fixture.db_connections.shared().unwrap();
    let jane = connection
        .find_synthetic_customer_by_first_name("Jane")
        .unwrap()
        .unwrap();
    assert_eq!(Some(jane.id), first.customer_id);
    assert!(!jane.is_active);
    // Release the pooled connection before the flow below acquires its own
    // (the in-memory fixture pool holds a single connection).
    drop(connection);

    let summary = fixture.rating_summary("provider-x");
    assert_eq!(AvgRatingValue::from(4.0), summary.average);
    assert_eq!(3, summary.review_count);
    assert_eq!(summary.review_count, summary.histogram.total());
}

#[test]
fn toggling_visibility_recomputes_summary_and_is_idempotent() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([completed_booking("booking-1", "customer-1", "provider-x")]);
    let directory = Directory::with(["provider-x"]);
    let admin = usecases::Actor::admin("admin");

    fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);
    let admin_review = fixture.create_admin_review(&directory, "provider-x", 3, None);
    let summary_before = fixture.rating_summary("provider-x");

    let hidden = flows::toggle_visibility(
        &fixture.db_connections,
        admin_review.id.as_str(),
        &admin,
        Some("seed content retired".into()),
    )
    .unwrap();
    assert_eq!(Visibility::Hidden, hidden);

    let summary = fixture.rating_summary("provider-x");
    assert_eq!(AvgRatingValue::from(5.0), summary.average);
    assert_eq!(1, summary.review_count);

    let entries =
        flows::load_audit_trail(&fixture.db_connections, admin_review.id.as_str()).unwrap();
    let toggle_entry = entries
        .iter()
        .find(|e| e.action == AuditAction::ToggleVisibility)
        .unwrap();
    assert_eq!(
        Some(Visibility::Visible),
        toggle_entry.before.as_ref().map(|r| r.visibility)
    );
    assert_eq!(
        Some(Visibility::Hidden),
        toggle_entry.after.as_ref().map(|r| r.visibility)
    );
    assert_eq!(Some("seed content retired".into()), toggle_entry.reason);

    // Toggling again restores the original summary.
    let restored = flows::toggle_visibility(
        &fixture.db_connections,
        admin_review.id.as_str(),
        &admin,
        None,
    )
    .unwrap();
    assert_eq!(Visibility::Visible, restored);
    assert_eq!(summary_before, fixture.rating_summary("provider-x"));
}

#[test]
fn admin_delete_leaves_audit_entry_behind() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([completed_booking("booking-1", "customer-1", "provider-x")]);
    let admin = usecases::Actor::admin("admin");

    let review = fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);
    flows::delete_review(
        &fixture.db_connections,
        review.id.as_str(),
        &admin,
        Some("requested by customer".into()),
    )
    .unwrap();

    // Back to the empty summary.
    let summary = fixture.rating_summary("provider-x");
    assert_eq!(AvgRatingValue::from(0.0), summary.average);
    assert_eq!(0, summary.review_count);

    // The review is gone but its audit trail is not.
    let connection = fixture.db_connections.shared().unwrap();
    assert!(matches!(
        connection.load_review(review.id.as_str()),
        Err(RepoError::NotFound)
    ));
    // Release the pooled connection before the flow below acquires its own
    // (the in-memory fixture pool holds a single connection).
    drop(connection);
    let entries = flows::load_audit_trail(&fixture.db_connections, review.id.as_str()).unwrap();
    let delete_entry = entries
        .iter()
        .find(|e| e.action == AuditAction::Delete)
        .unwrap();
    assert!(delete_entry.before.is_some());
    assert!(delete_entry.after.is_none());
    assert_eq!(Some("requested by customer".into()), delete_entry.reason);
}

#[test]
fn admin_create_is_audited() {
    let fixture = BackendFixture::new();
    let directory = Directory::with(["provider-x"]);
    let review = fixture.create_admin_review(&directory, "provider-x", 4, None);

    let entries = flows::load_audit_trail(&fixture.db_connections, review.id.as_str()).unwrap();
    assert_eq!(1, entries.len());
    assert_eq!(AuditAction::Create, entries[0].action);
    assert_eq!(Id::from("admin"), entries[0].actor_id);
    assert!(entries[0].before.is_none());
    assert_eq!(
        Some(review.id.clone()),
        entries[0].after.as_ref().map(|r| r.id.clone())
    );
}

#[test]
fn organic_mutations_are_not_audited() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([completed_booking("booking-1", "customer-1", "provider-x")]);
    let customer = usecases::Actor::customer("customer-1");

    let review = fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);
    flows::update_review(
        &fixture.db_connections,
        review.id.as_str(),
        usecases::ReviewPatch {
            rating: Some(RatingValue::new(4)),
            ..Default::default()
        },
        &customer,
        None,
    )
    .unwrap();

    assert_eq!(
        AvgRatingValue::from(4.0),
        fixture.rating_summary("provider-x").average
    );
    let entries = flows::load_audit_trail(&fixture.db_connections, review.id.as_str()).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn recompute_rebuilds_every_summary() {
    let fixture = BackendFixture::new();
    let bookings = Bookings::with([
        completed_booking("booking-1", "customer-1", "provider-x"),
        completed_booking("booking-2", "customer-2", "provider-y"),
    ]);
    fixture.create_organic_review(&bookings, "booking-1", "customer-1", 5);
    fixture.create_organic_review(&bookings, "booking-2", "customer-2", 2);

    let summary_x = fixture.rating_summary("provider-x");
    let summary_y = fixture.rating_summary("provider-y");

    let count = flows::recompute_rating_summaries(&fixture.db_connections).unwrap();
    assert_eq!(2, count);
    assert_eq!(summary_x, fixture.rating_summary("provider-x"));
    assert_eq!(summary_y, fixture.rating_summary("provider-y"));
}
