use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};
use time::{Date, OffsetDateTime};

use kernel::interface::query::{BookingQuery, DependOnBookingQuery};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingDetails, BookingId, BookingStatus, CheckIn, CheckOut, CreatedAt, Hotel,
    HotelAddress, HotelCity, HotelId, HotelName, NewBooking, Room, RoomId, RoomNumber, RoomPrice,
    RoomType, UserId,
};
use kernel::KernelError;

use crate::database::PostgresDatabase;
use crate::error::{ConvertError, DriverError};

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery<PoolConnection<Postgres>> for PostgresBookingRepository {
    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_details_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &BookingId,
    ) -> error_stack::Result<Option<BookingDetails>, KernelError> {
        PgBookingInternal::find_details_by_id(con, id)
            .await
            .convert_error()
    }

    async fn find_details_by_user_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<BookingDetails>, KernelError> {
        PgBookingInternal::find_details_by_user_id(con, user_id)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl BookingModifier<PoolConnection<Postgres>> for PostgresBookingRepository {
    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        booking: &NewBooking,
    ) -> error_stack::Result<Booking, KernelError> {
        PgBookingInternal::create(con, booking).await.convert_error()
    }

    async fn update_status(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &BookingId,
        status: &BookingStatus,
    ) -> error_stack::Result<Booking, KernelError> {
        PgBookingInternal::update_status(con, id, status)
            .await
            .convert_error()
    }
}

impl DependOnBookingQuery<PoolConnection<Postgres>> for PostgresDatabase {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &PostgresBookingRepository
    }
}

impl DependOnBookingModifier<PoolConnection<Postgres>> for PostgresDatabase {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &PostgresBookingRepository
    }
}

fn parse_status(status: &str) -> Result<BookingStatus, DriverError> {
    status
        .parse::<BookingStatus>()
        .map_err(|message| DriverError::Conversion(anyhow::anyhow!(message)))
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    user_id: i64,
    room_id: i64,
    check_in: Date,
    check_out: Date,
    status: String,
    created_at: OffsetDateTime,
}

impl TryFrom<BookingRow> for Booking {
    type Error = DriverError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking::new(
            BookingId::new(value.id),
            UserId::new(value.user_id),
            RoomId::new(value.room_id),
            CheckIn::new(value.check_in),
            CheckOut::new(value.check_out),
            parse_status(&value.status)?,
            CreatedAt::new(value.created_at),
        ))
    }
}

/// One row of the bookings ⋈ rooms ⋈ hotels join.
#[derive(sqlx::FromRow)]
struct BookingDetailsRow {
    booking_id: i64,
    user_id: i64,
    room_id: i64,
    check_in: Date,
    check_out: Date,
    status: String,
    booking_created_at: OffsetDateTime,
    hotel_id: i64,
    room_number: String,
    room_type: String,
    price: i64,
    hotel_name: String,
    city: String,
    address: String,
    hotel_created_at: OffsetDateTime,
}

impl TryFrom<BookingDetailsRow> for BookingDetails {
    type Error = DriverError;

    fn try_from(value: BookingDetailsRow) -> Result<Self, Self::Error> {
        let booking = Booking::new(
            BookingId::new(value.booking_id),
            UserId::new(value.user_id),
            RoomId::new(value.room_id),
            CheckIn::new(value.check_in),
            CheckOut::new(value.check_out),
            parse_status(&value.status)?,
            CreatedAt::new(value.booking_created_at),
        );
        let room = Room::new(
            RoomId::new(value.room_id),
            HotelId::new(value.hotel_id),
            RoomNumber::new(value.room_number),
            RoomType::new(value.room_type),
            RoomPrice::new(value.price),
        );
        let hotel = Hotel::new(
            HotelId::new(value.hotel_id),
            HotelName::new(value.hotel_name),
            HotelCity::new(value.city),
            HotelAddress::new(value.address),
            CreatedAt::new(value.hotel_created_at),
        );
        Ok(BookingDetails::new(booking, room, hotel))
    }
}

static DETAILS_SELECT: &str = r#"
SELECT b.id         AS booking_id,
       b.user_id,
       b.room_id,
       b.check_in,
       b.check_out,
       b.status,
       b.created_at AS booking_created_at,
       r.hotel_id,
       r.room_number,
       r.room_type,
       r.price,
       h.name       AS hotel_name,
       h.city,
       h.address,
       h.created_at AS hotel_created_at
FROM bookings b
         JOIN rooms r ON r.id = b.room_id
         JOIN hotels h ON h.id = r.hotel_id
"#;

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookingId,
    ) -> Result<Option<Booking>, DriverError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            SELECT id, user_id, room_id, check_in, check_out, status, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        row.map(Booking::try_from).transpose()
    }

    async fn find_details_by_id(
        con: &mut PgConnection,
        id: &BookingId,
    ) -> Result<Option<BookingDetails>, DriverError> {
        let query = format!("{} WHERE b.id = $1", DETAILS_SELECT);
        let row = sqlx::query_as::<_, BookingDetailsRow>(&query)
            .bind(id.as_ref())
            .fetch_optional(con)
            .await?;
        row.map(BookingDetails::try_from).transpose()
    }

    async fn find_details_by_user_id(
        con: &mut PgConnection,
        user_id: &UserId,
    ) -> Result<Vec<BookingDetails>, DriverError> {
        let query = format!(
            "{} WHERE b.user_id = $1 ORDER BY b.created_at DESC, b.id DESC",
            DETAILS_SELECT
        );
        let rows = sqlx::query_as::<_, BookingDetailsRow>(&query)
            .bind(user_id.as_ref())
            .fetch_all(con)
            .await?;
        rows.into_iter().map(BookingDetails::try_from).collect()
    }

    async fn create(con: &mut PgConnection, booking: &NewBooking) -> Result<Booking, DriverError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            INSERT INTO bookings (user_id, room_id, check_in, check_out, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, room_id, check_in, check_out, status, created_at
            "#,
        )
        .bind(booking.user_id().as_ref())
        .bind(booking.room_id().as_ref())
        .bind(booking.check_in().as_ref())
        .bind(booking.check_out().as_ref())
        .bind(booking.status().as_str())
        .fetch_one(con)
        .await?;
        Booking::try_from(row)
    }

    async fn update_status(
        con: &mut PgConnection,
        id: &BookingId,
        status: &BookingStatus,
    ) -> Result<Booking, DriverError> {
        let row = sqlx::query_as::<_, BookingRow>(
            // language=postgresql
            r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1
            RETURNING id, user_id, room_id, check_in, check_out, status, created_at
            "#,
        )
        .bind(id.as_ref())
        .bind(status.as_str())
        .fetch_one(con)
        .await?;
        Booking::try_from(row)
    }
}

#[cfg(test)]
mod test {
    use application::service::{
        CancelBookingService, CreateBookingService, GetBookingService, SeedService,
    };
    use application::transfer::{CancelBookingDto, CreateBookingDto};
    use kernel::prelude::entity::BookingStatus;
    use kernel::KernelError;
    use time::macros::date;

    use crate::database::postgres::PostgresDatabase;

    fn stay(room_id: i64, check_in: &str, check_out: &str) -> CreateBookingDto {
        CreateBookingDto {
            room_id: Some(room_id),
            check_in: Some(check_in.to_string()),
            check_out: Some(check_out.to_string()),
        }
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn booking_workflow() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;

        let hotel = db.seed_catalog().await?;
        assert_eq!(hotel.name, "Test Hotel");
        let seeded: Vec<_> = hotel
            .rooms
            .iter()
            .map(|room| (room.number.as_str(), room.kind.as_str(), room.price))
            .collect();
        assert_eq!(
            seeded,
            [("101", "single", 100_000), ("102", "double", 150_000)]
        );
        let room_id = hotel.rooms[0].id;

        let created = db
            .create_booking(stay(room_id, "2025-12-01", "2025-12-03"))
            .await?;
        assert_eq!(created.status, BookingStatus::Confirmed);
        assert_eq!(created.check_in, date!(2025 - 12 - 01));
        assert_eq!(created.check_out, date!(2025 - 12 - 03));
        assert_eq!(created.room.as_ref().map(|room| room.id), Some(room_id));
        assert_eq!(
            created.hotel.as_ref().map(|hotel| hotel.id),
            Some(hotel.id)
        );

        let mine = db.get_my_bookings().await?;
        let listed = mine
            .iter()
            .find(|booking| booking.id == created.id)
            .expect("created booking is listed");
        assert_eq!(listed.check_in, created.check_in);
        assert_eq!(listed.check_out, created.check_out);

        // Newest first: a second booking lands in front of the first.
        let second = db
            .create_booking(stay(room_id, "2026-01-01", "2026-01-02"))
            .await?;
        let mine = db.get_my_bookings().await?;
        let created_pos = mine.iter().position(|b| b.id == created.id).unwrap();
        let second_pos = mine.iter().position(|b| b.id == second.id).unwrap();
        assert!(second_pos < created_pos);

        // Cancel flips the status once and then becomes a no-op.
        let cancelled = db.cancel_booking(CancelBookingDto { id: created.id }).await?;
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        let again = db.cancel_booking(CancelBookingDto { id: created.id }).await?;
        assert_eq!(again.status, BookingStatus::Cancelled);

        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn cancel_unknown_booking_is_not_found() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;

        let result = db.cancel_booking(CancelBookingDto { id: i64::MAX }).await;
        let report = result.expect_err("missing booking must not cancel");
        assert!(matches!(
            report.current_context(),
            KernelError::NotFound(_)
        ));

        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn invalid_stay_leaves_the_store_untouched() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;

        let before = db.get_my_bookings().await?.len();
        let result = db.create_booking(stay(1, "2025-12-01", "2025-11-30")).await;
        let report = result.expect_err("reversed dates must not book");
        assert!(matches!(
            report.current_context(),
            KernelError::Validation(_)
        ));
        assert_eq!(db.get_my_bookings().await?.len(), before);

        Ok(())
    }
}
