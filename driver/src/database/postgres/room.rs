use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use kernel::interface::query::{DependOnRoomQuery, RoomQuery};
use kernel::interface::update::{DependOnRoomModifier, RoomModifier};
use kernel::prelude::entity::{
    HotelId, NewRoom, Room, RoomId, RoomNumber, RoomPrice, RoomType,
};
use kernel::KernelError;

use crate::database::PostgresDatabase;
use crate::error::{ConvertError, DriverError};

pub struct PostgresRoomRepository;

#[async_trait::async_trait]
impl RoomQuery<PoolConnection<Postgres>> for PostgresRoomRepository {
    async fn find_by_hotel_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        hotel_id: &HotelId,
    ) -> error_stack::Result<Vec<Room>, KernelError> {
        PgRoomInternal::find_by_hotel_id(con, hotel_id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl RoomModifier<PoolConnection<Postgres>> for PostgresRoomRepository {
    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        room: &NewRoom,
    ) -> error_stack::Result<Room, KernelError> {
        PgRoomInternal::create(con, room).await.convert_error()
    }
}

impl DependOnRoomQuery<PoolConnection<Postgres>> for PostgresDatabase {
    type RoomQuery = PostgresRoomRepository;
    fn room_query(&self) -> &Self::RoomQuery {
        &PostgresRoomRepository
    }
}

impl DependOnRoomModifier<PoolConnection<Postgres>> for PostgresDatabase {
    type RoomModifier = PostgresRoomRepository;
    fn room_modifier(&self) -> &Self::RoomModifier {
        &PostgresRoomRepository
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: i64,
    hotel_id: i64,
    room_number: String,
    room_type: String,
    price: i64,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        Room::new(
            RoomId::new(value.id),
            HotelId::new(value.hotel_id),
            RoomNumber::new(value.room_number),
            RoomType::new(value.room_type),
            RoomPrice::new(value.price),
        )
    }
}

pub(in crate::database) struct PgRoomInternal;

impl PgRoomInternal {
    async fn find_by_hotel_id(
        con: &mut PgConnection,
        hotel_id: &HotelId,
    ) -> Result<Vec<Room>, DriverError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            SELECT id, hotel_id, room_number, room_type, price
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY id
            "#,
        )
        .bind(hotel_id.as_ref())
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Room::from).collect())
    }

    async fn create(con: &mut PgConnection, room: &NewRoom) -> Result<Room, DriverError> {
        let row = sqlx::query_as::<_, RoomRow>(
            // language=postgresql
            r#"
            INSERT INTO rooms (hotel_id, room_number, room_type, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, hotel_id, room_number, room_type, price
            "#,
        )
        .bind(room.hotel_id().as_ref())
        .bind(room.number().as_ref())
        .bind(room.kind().as_ref())
        .bind(room.price().as_ref())
        .fetch_one(con)
        .await?;
        Ok(Room::from(row))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::RoomQuery;
    use kernel::interface::update::{HotelModifier, RoomModifier};
    use kernel::prelude::entity::{
        HotelAddress, HotelCity, HotelName, NewHotel, NewRoom, RoomNumber, RoomPrice, RoomType,
    };
    use kernel::KernelError;

    use crate::database::postgres::hotel::PostgresHotelRepository;
    use crate::database::postgres::room::PostgresRoomRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let hotel = NewHotel::new(
            HotelName::new("Room Test Hotel".to_string()),
            HotelCity::new("Seoul".to_string()),
            HotelAddress::new("123 Test Street".to_string()),
        );
        let hotel = PostgresHotelRepository.create(&mut con, &hotel).await?;

        let room = NewRoom::new(
            *hotel.id(),
            RoomNumber::new("101".to_string()),
            RoomType::new("single".to_string()),
            RoomPrice::new(100_000_i64),
        );
        let created = PostgresRoomRepository.create(&mut con, &room).await?;
        assert_eq!(created.hotel_id(), hotel.id());

        let rooms = PostgresRoomRepository
            .find_by_hotel_id(&mut con, hotel.id())
            .await?;
        assert_eq!(rooms, vec![created]);

        Ok(())
    }
}
