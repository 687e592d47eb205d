use crate::{id::*, time::*};

/// Role tag that distinguishes placeholder identities from real accounts.
pub const SYNTHETIC_MARKER: &str = "synthetic_reviewer";

/// A non-real, inactive placeholder identity used to attribute an
/// admin-authored review to a display name.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticCustomer {
    pub id                  : Id,
    pub first_name          : String,
    pub last_name           : String,
    pub marker              : String,
    /// Collision-free placeholder contact identifier. Not a reachable
    /// address.
    pub placeholder_contact : String,
    pub is_active           : bool,
    pub created_at          : Timestamp,
}

impl SyntheticCustomer {
    pub fn is_synthetic(&self) -> bool {
        self.marker == SYNTHETIC_MARKER
    }
}

/// A display name split into first name and remainder.
///
/// The first whitespace token becomes the first name; the remaining tokens
/// joined become the last name, defaulting to `"Customer"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName {
    pub first_name: String,
    pub last_name: String,
}

impl DisplayName {
    pub fn parse(name: &str) -> Option<Self> {
        let mut tokens = name.split_whitespace();
        let first_name = tokens.next()?.to_string();
        let rest = tokens.collect::<Vec<_>>().join(" ");
        let last_name = if rest.is_empty() {
            "Customer".to_string()
        } else {
            rest
        };
        Some(Self {
            first_name,
            last_name,
        })
    }
}
