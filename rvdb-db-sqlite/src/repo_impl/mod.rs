// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use rvdb_core::{
    db::Db,
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod audit;
mod customer;
mod rating_summary;
mod review;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

impl<'a> Db for DbReadWrite<'a> {}
impl<'a> Db for DbConnection<'a> {}
impl<'a> Db for DbReadOnly<'a> {}
