use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::EnumString;
use thiserror::Error;

use crate::id::*;

pub type BookingStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum BookingStatus {
    Cancelled = -1,
    Pending   =  0,
    Confirmed =  1,
    Completed =  2,
}

impl BookingStatus {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

#[derive(Debug, Error)]
#[error("Invalid booking status primitive: {0}")]
pub struct InvalidBookingStatusPrimitive(BookingStatusPrimitive);

impl TryFrom<BookingStatusPrimitive> for BookingStatus {
    type Error = InvalidBookingStatusPrimitive;
    fn try_from(from: BookingStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidBookingStatusPrimitive(from))
    }
}

impl From<BookingStatus> for BookingStatusPrimitive {
    fn from(from: BookingStatus) -> Self {
        from.to_i16().expect("booking status primitive")
    }
}

/// Read-only snapshot of a booking as reported by the external booking
/// collaborator. Bookings are never created or modified here.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id          : Id,
    pub customer_id : Id,
    /// The assigned provider, if any.
    pub provider_id : Option<Id>,
    pub status      : BookingStatus,
}
