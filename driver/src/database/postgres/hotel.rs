use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use time::OffsetDateTime;

use kernel::interface::query::{DependOnHotelQuery, HotelQuery};
use kernel::interface::update::{DependOnHotelModifier, HotelModifier};
use kernel::prelude::entity::{
    CreatedAt, Hotel, HotelAddress, HotelCity, HotelId, HotelName, NewHotel,
};
use kernel::KernelError;

use crate::database::PostgresDatabase;
use crate::error::{ConvertError, DriverError};

pub struct PostgresHotelRepository;

#[async_trait::async_trait]
impl HotelQuery<PoolConnection<Postgres>> for PostgresHotelRepository {
    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &HotelId,
    ) -> error_stack::Result<Option<Hotel>, KernelError> {
        PgHotelInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_all(
        &self,
        con: &mut PoolConnection<Postgres>,
    ) -> error_stack::Result<Vec<Hotel>, KernelError> {
        PgHotelInternal::find_all(con).await.convert_error()
    }
}

#[async_trait::async_trait]
impl HotelModifier<PoolConnection<Postgres>> for PostgresHotelRepository {
    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        hotel: &NewHotel,
    ) -> error_stack::Result<Hotel, KernelError> {
        PgHotelInternal::create(con, hotel).await.convert_error()
    }
}

impl DependOnHotelQuery<PoolConnection<Postgres>> for PostgresDatabase {
    type HotelQuery = PostgresHotelRepository;
    fn hotel_query(&self) -> &Self::HotelQuery {
        &PostgresHotelRepository
    }
}

impl DependOnHotelModifier<PoolConnection<Postgres>> for PostgresDatabase {
    type HotelModifier = PostgresHotelRepository;
    fn hotel_modifier(&self) -> &Self::HotelModifier {
        &PostgresHotelRepository
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    name: String,
    city: String,
    address: String,
    created_at: OffsetDateTime,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        Hotel::new(
            HotelId::new(value.id),
            HotelName::new(value.name),
            HotelCity::new(value.city),
            HotelAddress::new(value.address),
            CreatedAt::new(value.created_at),
        )
    }
}

pub(in crate::database) struct PgHotelInternal;

impl PgHotelInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &HotelId,
    ) -> Result<Option<Hotel>, DriverError> {
        let row = sqlx::query_as::<_, HotelRow>(
            // language=postgresql
            r#"
            SELECT id, name, city, address, created_at
            FROM hotels
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(Hotel::from))
    }

    async fn find_all(con: &mut PgConnection) -> Result<Vec<Hotel>, DriverError> {
        let rows = sqlx::query_as::<_, HotelRow>(
            // language=postgresql
            r#"
            SELECT id, name, city, address, created_at
            FROM hotels
            ORDER BY id
            "#,
        )
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn create(con: &mut PgConnection, hotel: &NewHotel) -> Result<Hotel, DriverError> {
        let row = sqlx::query_as::<_, HotelRow>(
            // language=postgresql
            r#"
            INSERT INTO hotels (name, city, address)
            VALUES ($1, $2, $3)
            RETURNING id, name, city, address, created_at
            "#,
        )
        .bind(hotel.name().as_ref())
        .bind(hotel.city().as_ref())
        .bind(hotel.address().as_ref())
        .fetch_one(con)
        .await?;
        Ok(Hotel::from(row))
    }
}

#[cfg(test)]
mod test {
    use application::service::{GetHotelService, SeedService};
    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::HotelQuery;
    use kernel::interface::update::HotelModifier;
    use kernel::prelude::entity::{HotelAddress, HotelCity, HotelName, NewHotel};
    use kernel::KernelError;

    use crate::database::postgres::hotel::PostgresHotelRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let hotel = NewHotel::new(
            HotelName::new("Driver Test Hotel".to_string()),
            HotelCity::new("Seoul".to_string()),
            HotelAddress::new("123 Test Street".to_string()),
        );
        let created = PostgresHotelRepository.create(&mut con, &hotel).await?;
        assert_eq!(created.name().as_ref(), "Driver Test Hotel");

        let found = PostgresHotelRepository
            .find_by_id(&mut con, created.id())
            .await?;
        assert_eq!(found, Some(created.clone()));

        let all = PostgresHotelRepository.find_all(&mut con).await?;
        assert!(all.contains(&created));

        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn seeded_catalog_lists_the_demo_rooms() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;

        let seeded = db.seed_catalog().await?;
        let catalog = db.get_hotels().await?;
        let hotel = catalog
            .iter()
            .find(|hotel| hotel.id == seeded.id)
            .expect("seeded hotel is listed");
        assert_eq!(hotel.name, "Test Hotel");
        assert_eq!(hotel.city, "Seoul");
        assert_eq!(hotel.address, "123 Test Street");

        let rooms: Vec<_> = hotel
            .rooms
            .iter()
            .map(|room| (room.number.as_str(), room.kind.as_str(), room.price))
            .collect();
        assert_eq!(
            rooms,
            [("101", "single", 100_000), ("102", "double", 150_000)]
        );

        Ok(())
    }
}
