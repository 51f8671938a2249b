use crate::transfer::HotelDto;
use kernel::interface::database::{DependOnDatabaseConnection, QueryDatabaseConnection};
use kernel::interface::query::{DependOnHotelQuery, DependOnRoomQuery, HotelQuery, RoomQuery};
use kernel::interface::update::{
    DependOnHotelModifier, DependOnRoomModifier, HotelModifier, RoomModifier,
};
use kernel::prelude::entity::{
    HotelAddress, HotelCity, HotelName, NewHotel, NewRoom, RoomNumber, RoomPrice, RoomType,
};
use kernel::KernelError;

#[async_trait::async_trait]
pub trait GetHotelService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnHotelQuery<Connection>
    + DependOnRoomQuery<Connection>
{
    /// The whole catalog, every hotel with its rooms materialized.
    async fn get_hotels(&self) -> error_stack::Result<Vec<HotelDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let hotels = self.hotel_query().find_all(&mut connection).await?;
        let mut result = Vec::with_capacity(hotels.len());
        for hotel in hotels {
            let rooms = self
                .room_query()
                .find_by_hotel_id(&mut connection, hotel.id())
                .await?;
            result.push(HotelDto::from_parts(hotel, rooms));
        }
        Ok(result)
    }
}

impl<Connection: 'static + Send, T> GetHotelService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnHotelQuery<Connection>
        + DependOnRoomQuery<Connection>
{
}

static SEED_ROOMS: [(&str, &str, i64); 2] =
    [("101", "single", 100_000), ("102", "double", 150_000)];

#[async_trait::async_trait]
pub trait SeedService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnHotelModifier<Connection>
    + DependOnRoomModifier<Connection>
{
    /// Inserts the fixed demo hotel with its two rooms. Intentionally not
    /// idempotent, each call creates a fresh copy.
    async fn seed_catalog(&self) -> error_stack::Result<HotelDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let hotel = NewHotel::new(
            HotelName::new("Test Hotel"),
            HotelCity::new("Seoul"),
            HotelAddress::new("123 Test Street"),
        );
        let hotel = self.hotel_modifier().create(&mut connection, &hotel).await?;

        let mut rooms = Vec::with_capacity(SEED_ROOMS.len());
        for (number, kind, price) in SEED_ROOMS {
            let room = NewRoom::new(
                *hotel.id(),
                RoomNumber::new(number),
                RoomType::new(kind),
                RoomPrice::new(price),
            );
            rooms.push(self.room_modifier().create(&mut connection, &room).await?);
        }
        Ok(HotelDto::from_parts(hotel, rooms))
    }
}

impl<Connection: 'static + Send, T> SeedService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnHotelModifier<Connection>
        + DependOnRoomModifier<Connection>
{
}
