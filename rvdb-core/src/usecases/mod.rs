use crate::entities::*;

mod can_review;
mod create_admin_review;
mod create_organic_review;
mod delete_review;
mod error;
mod load_audit_trail;
mod load_rating_summary;
mod refresh_rating_summary;
mod resolve_reviewer;
mod toggle_visibility;
mod update_review;

#[cfg(test)]
pub mod tests;

pub use self::{
    can_review::*, create_admin_review::*, create_organic_review::*, delete_review::*,
    error::Error, load_audit_trail::*, load_rating_summary::*, refresh_rating_summary::*,
    resolve_reviewer::*, toggle_visibility::*, update_review::*,
};

mod prelude {
    pub use super::{error::Error, Actor, ActorRole};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        db::*,
        entities::*,
        gateways::{booking::*, directory::*},
        repositories::{Error as RepoError, *},
    };
}

/// The authenticated caller of an operation, as established by the
/// external identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: Id,
    pub role: ActorRole,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ActorRole {
    Customer = 0,
    Admin    = 1,
}

impl Actor {
    pub fn customer(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            role: ActorRole::Customer,
        }
    }

    pub fn admin(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            role: ActorRole::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ActorRole::Admin
    }
}
