use crate::entity::{Booking, BookingDetails, BookingId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery<Connection>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;

    /// Booking joined with room and hotel in one query.
    async fn find_details_by_id(
        &self,
        con: &mut Connection,
        id: &BookingId,
    ) -> error_stack::Result<Option<BookingDetails>, KernelError>;

    /// All bookings of one user joined room and hotel, newest first.
    async fn find_details_by_user_id(
        &self,
        con: &mut Connection,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<BookingDetails>, KernelError>;
}

pub trait DependOnBookingQuery<Connection>: Sync + Send + 'static {
    type BookingQuery: BookingQuery<Connection>;
    fn booking_query(&self) -> &Self::BookingQuery;
}
