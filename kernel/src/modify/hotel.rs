use crate::entity::{Hotel, NewHotel};
use crate::KernelError;

#[async_trait::async_trait]
pub trait HotelModifier<Connection>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        hotel: &NewHotel,
    ) -> error_stack::Result<Hotel, KernelError>;
}

pub trait DependOnHotelModifier<Connection>: 'static + Sync + Send {
    type HotelModifier: HotelModifier<Connection>;
    fn hotel_modifier(&self) -> &Self::HotelModifier;
}
