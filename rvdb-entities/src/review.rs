use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::EnumString;
use thiserror::Error;

use crate::{id::*, rating::*, time::*};

pub type VisibilityPrimitive = i16;

/// Moderation state of a review.
///
/// Hidden reviews are excluded from the rating summary and from the
/// provider's public profile.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Visibility {
    Hidden  = 0,
    Visible = 1,
}

impl Visibility {
    pub const fn default() -> Self {
        Self::Visible
    }

    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }
}

#[derive(Debug, Error)]
#[error("Invalid visibility primitive: {0}")]
pub struct InvalidVisibilityPrimitive(VisibilityPrimitive);

impl TryFrom<VisibilityPrimitive> for Visibility {
    type Error = InvalidVisibilityPrimitive;
    fn try_from(from: VisibilityPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidVisibilityPrimitive(from))
    }
}

impl From<Visibility> for VisibilityPrimitive {
    fn from(from: Visibility) -> Self {
        from.to_i16().expect("visibility primitive")
    }
}

/// A single review of a provider.
///
/// Invariants that are enforced on creation and preserved on update:
///
/// - `booking_id` is present for organic reviews and absent for
///   admin-authored reviews.
/// - `admin_created_by` is present iff `is_admin_created`.
/// - At most one organic review exists per `(booking_id, customer_id)`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id               : Id,
    pub booking_id       : Option<Id>,
    pub customer_id      : Option<Id>,
    pub provider_id      : Id,
    pub rating           : RatingValue,
    pub comment          : Option<String>,
    pub is_admin_created : bool,
    pub admin_created_by : Option<Id>,
    pub admin_notes      : Option<String>,
    pub visibility       : Visibility,
    pub is_verified      : bool,
    pub created_at       : Timestamp,
    pub updated_at       : Timestamp,
}

impl Review {
    pub fn is_organic(&self) -> bool {
        !self.is_admin_created
    }

    /// True if the given customer authored this review.
    pub fn is_owned_by(&self, customer_id: &Id) -> bool {
        self.customer_id.as_ref() == Some(customer_id)
    }
}
