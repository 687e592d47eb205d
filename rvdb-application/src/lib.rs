#[macro_use]
extern crate log;

mod audit_trail;
mod can_review;
mod create_admin_review;
mod create_organic_review;
mod delete_review;
mod load_audit_trail;
mod load_rating_summary;
mod recompute_rating_summaries;
mod toggle_visibility;
mod update_review;

pub mod prelude {
    pub use super::{
        can_review::*, create_admin_review::*, create_organic_review::*, delete_review::*,
        load_audit_trail::*, load_rating_summary::*, recompute_rating_summaries::*,
        toggle_visibility::*, update_review::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use rvdb_core::{
    entities::*,
    gateways::{booking::*, directory::*},
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use rvdb_db_sqlite::Connections;
}
