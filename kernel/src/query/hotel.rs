use crate::entity::{Hotel, HotelId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait HotelQuery<Connection>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &HotelId,
    ) -> error_stack::Result<Option<Hotel>, KernelError>;

    async fn find_all(&self, con: &mut Connection) -> error_stack::Result<Vec<Hotel>, KernelError>;
}

pub trait DependOnHotelQuery<Connection>: Sync + Send + 'static {
    type HotelQuery: HotelQuery<Connection>;
    fn hotel_query(&self) -> &Self::HotelQuery;
}
