use crate::entities::*;

/// Read-only access to the external service catalogue.
pub trait ProviderDirectory {
    /// True if the id refers to an existing provider of the rateable role.
    fn is_rateable_provider(&self, id: &Id) -> bool;
}
