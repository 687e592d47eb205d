//! # rvdb-core
//!
//! The domain core of the review rating engine: repository traits,
//! gateways to external collaborators, the pure rating-summary
//! computation, and one use case per operation.

pub mod db;
pub mod gateways;
pub mod rating;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use rvdb_entities::{
        audit::*, booking::*, customer::*, id::*, rating::*, review::*, time::*,
    };
}
