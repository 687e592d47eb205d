use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{Display, EnumString};
use thiserror::Error;

use crate::{id::*, review::*, time::*};

pub type AuditActionPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum AuditAction {
    Create           = 0,
    Update           = 1,
    Delete           = 2,
    ToggleVisibility = 3,
}

#[derive(Debug, Error)]
#[error("Invalid audit action primitive: {0}")]
pub struct InvalidAuditActionPrimitive(AuditActionPrimitive);

impl TryFrom<AuditActionPrimitive> for AuditAction {
    type Error = InvalidAuditActionPrimitive;
    fn try_from(from: AuditActionPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidAuditActionPrimitive(from))
    }
}

impl From<AuditAction> for AuditActionPrimitive {
    fn from(from: AuditAction) -> Self {
        from.to_i16().expect("audit action primitive")
    }
}

/// One append-only record of an admin-initiated review mutation.
///
/// `review_id` keeps pointing at the review even after the review row has
/// been deleted; the snapshots preserve the state that was mutated.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id         : Id,
    pub review_id  : Option<Id>,
    pub actor_id   : Id,
    pub action     : AuditAction,
    pub before     : Option<Review>,
    pub after      : Option<Review>,
    pub reason     : Option<String>,
    pub created_at : Timestamp,
}
