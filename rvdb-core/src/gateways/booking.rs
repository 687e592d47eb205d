use crate::entities::*;

/// Read-only access to the external booking collaborator.
///
/// The engine references completed bookings but never manages booking
/// state.
pub trait BookingGateway {
    fn get_booking(&self, id: &Id) -> Option<Booking>;
}
