use crate::entity::{Booking, BookingId, BookingStatus, NewBooking};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier<Connection>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        booking: &NewBooking,
    ) -> error_stack::Result<Booking, KernelError>;

    /// Overwrites the status column and returns the updated row. Bookings are
    /// never deleted, the cancel transition is the only mutation.
    async fn update_status(
        &self,
        con: &mut Connection,
        id: &BookingId,
        status: &BookingStatus,
    ) -> error_stack::Result<Booking, KernelError>;
}

pub trait DependOnBookingModifier<Connection>: 'static + Sync + Send {
    type BookingModifier: BookingModifier<Connection>;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
