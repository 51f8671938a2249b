use crate::entity::{NewRoom, Room};
use crate::KernelError;

#[async_trait::async_trait]
pub trait RoomModifier<Connection>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        room: &NewRoom,
    ) -> error_stack::Result<Room, KernelError>;
}

pub trait DependOnRoomModifier<Connection>: 'static + Sync + Send {
    type RoomModifier: RoomModifier<Connection>;
    fn room_modifier(&self) -> &Self::RoomModifier;
}
