use crate::entity::{HotelId, Room};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RoomQuery<Connection>: Sync + Send + 'static {
    async fn find_by_hotel_id(
        &self,
        con: &mut Connection,
        hotel_id: &HotelId,
    ) -> error_stack::Result<Vec<Room>, KernelError>;
}

pub trait DependOnRoomQuery<Connection>: Sync + Send + 'static {
    type RoomQuery: RoomQuery<Connection>;
    fn room_query(&self) -> &Self::RoomQuery;
}
