pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{booking_builder::*, review_builder::*};

pub mod review_builder {

    use super::*;
    use crate::{id::*, rating::*, review::*, time::*};

    #[derive(Debug)]
    pub struct ReviewBuild {
        review: Review,
    }

    impl ReviewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.review.id = id.into();
            self
        }
        pub fn booking(mut self, booking_id: &str, customer_id: &str) -> Self {
            self.review.booking_id = Some(booking_id.into());
            self.review.customer_id = Some(customer_id.into());
            self
        }
        pub fn provider(mut self, provider_id: &str) -> Self {
            self.review.provider_id = provider_id.into();
            self
        }
        pub fn rating(mut self, rating: i8) -> Self {
            self.review.rating = RatingValue::new(rating);
            self
        }
        pub fn comment(mut self, comment: &str) -> Self {
            self.review.comment = Some(comment.into());
            self
        }
        pub fn admin_created_by(mut self, admin_id: &str) -> Self {
            self.review.is_admin_created = true;
            self.review.admin_created_by = Some(admin_id.into());
            self.review.booking_id = None;
            self
        }
        pub fn admin_notes(mut self, notes: &str) -> Self {
            self.review.admin_notes = Some(notes.into());
            self
        }
        pub fn visibility(mut self, visibility: Visibility) -> Self {
            self.review.visibility = visibility;
            self
        }
        pub fn finish(self) -> Review {
            self.review
        }
    }

    impl Builder for Review {
        type Build = ReviewBuild;
        fn build() -> ReviewBuild {
            let now = Timestamp::now();
            ReviewBuild {
                review: Review {
                    id: Id::new(),
                    booking_id: None,
                    customer_id: None,
                    provider_id: Id::new(),
                    rating: RatingValue::new(5),
                    comment: None,
                    is_admin_created: false,
                    admin_created_by: None,
                    admin_notes: None,
                    visibility: Visibility::default(),
                    is_verified: true,
                    created_at: now,
                    updated_at: now,
                },
            }
        }
    }
}

pub mod booking_builder {

    use super::*;
    use crate::{booking::*, id::*};

    #[derive(Debug)]
    pub struct BookingBuild {
        booking: Booking,
    }

    impl BookingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.booking.id = id.into();
            self
        }
        pub fn customer(mut self, customer_id: &str) -> Self {
            self.booking.customer_id = customer_id.into();
            self
        }
        pub fn provider(mut self, provider_id: &str) -> Self {
            self.booking.provider_id = Some(provider_id.into());
            self
        }
        pub fn no_provider(mut self) -> Self {
            self.booking.provider_id = None;
            self
        }
        pub fn status(mut self, status: BookingStatus) -> Self {
            self.booking.status = status;
            self
        }
        pub fn finish(self) -> Booking {
            self.booking
        }
    }

    impl Builder for Booking {
        type Build = BookingBuild;
        fn build() -> BookingBuild {
            BookingBuild {
                booking: Booking {
                    id: Id::new(),
                    customer_id: Id::new(),
                    provider_id: Some(Id::new()),
                    status: BookingStatus::Completed,
                },
            }
        }
    }
}
