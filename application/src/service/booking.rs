use crate::service::get_or_create_default_user;
use crate::transfer::{BookingDto, CancelBookingDto, CreateBookingDto};
use error_stack::{Report, ResultExt};
use kernel::interface::database::{DependOnDatabaseConnection, QueryDatabaseConnection};
use kernel::interface::query::{BookingQuery, DependOnBookingQuery, DependOnUserQuery};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnUserModifier,
};
use kernel::prelude::entity::{
    BookingId, BookingStatus, CheckIn, CheckOut, NewBooking, RoomId,
};
use kernel::KernelError;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Authoritative request validation. The client repeats the ordering check as
/// a UX nicety, this is the check that counts.
fn validate_stay(
    dto: &CreateBookingDto,
) -> error_stack::Result<(RoomId, CheckIn, CheckOut), KernelError> {
    let (Some(room_id), Some(check_in), Some(check_out)) = (
        dto.room_id,
        dto.check_in.as_deref(),
        dto.check_out.as_deref(),
    ) else {
        return Err(Report::new(KernelError::Validation(
            "roomId, checkIn and checkOut are required".to_string(),
        )));
    };

    let parse = |raw: &str| {
        Date::parse(raw, DATE_FORMAT).change_context_lazy(|| {
            KernelError::Validation("invalid date format, expected YYYY-MM-DD".to_string())
        })
    };
    let check_in = parse(check_in)?;
    let check_out = parse(check_out)?;

    if check_in >= check_out {
        return Err(Report::new(KernelError::Validation(
            "check-in date must be before check-out date".to_string(),
        )));
    }

    Ok((
        RoomId::new(room_id),
        CheckIn::new(check_in),
        CheckOut::new(check_out),
    ))
}

#[async_trait::async_trait]
pub trait CreateBookingService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
    + DependOnBookingQuery<Connection>
    + DependOnBookingModifier<Connection>
{
    /// Validates the request, resolves the guest user, persists a confirmed
    /// booking and reads it back joined with its room and hotel.
    ///
    /// The room id is not pre-checked: a nonexistent room surfaces as a
    /// storage failure on insert, and overlapping stays on the same room are
    /// accepted without coordination.
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let (room_id, check_in, check_out) = validate_stay(&dto)?;

        let mut connection = self.database_connection().transact().await?;
        let user =
            get_or_create_default_user(self.user_query(), self.user_modifier(), &mut connection)
                .await?;

        let booking = NewBooking::new(
            *user.id(),
            room_id,
            check_in,
            check_out,
            BookingStatus::Confirmed,
        );
        let booking = self
            .booking_modifier()
            .create(&mut connection, &booking)
            .await?;

        let details = self
            .booking_query()
            .find_details_by_id(&mut connection, booking.id())
            .await?;
        Ok(match details {
            Some(details) => BookingDto::from(details),
            // Join came back empty, return the bare row.
            None => BookingDto::from(booking),
        })
    }
}

impl<Connection: 'static + Send, T> CreateBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
        + DependOnBookingQuery<Connection>
        + DependOnBookingModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetBookingService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
    + DependOnBookingQuery<Connection>
{
    /// All bookings of the guest user joined room and hotel, newest first.
    async fn get_my_bookings(&self) -> error_stack::Result<Vec<BookingDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let user =
            get_or_create_default_user(self.user_query(), self.user_modifier(), &mut connection)
                .await?;

        let bookings = self
            .booking_query()
            .find_details_by_user_id(&mut connection, user.id())
            .await?;
        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }
}

impl<Connection: 'static + Send, T> GetBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
        + DependOnBookingQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CancelBookingService<Connection: 'static + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookingQuery<Connection>
    + DependOnBookingModifier<Connection>
{
    /// Flips the booking to cancelled. Cancelling twice is a no-op that
    /// returns the row unchanged, so concurrent cancels are safe.
    async fn cancel_booking(
        &self,
        dto: CancelBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let id = BookingId::new(dto.id);
        let mut connection = self.database_connection().transact().await?;

        let Some(booking) = self.booking_query().find_by_id(&mut connection, &id).await? else {
            return Err(Report::new(KernelError::NotFound(
                "Booking not found".to_string(),
            )));
        };
        if booking.status().is_cancelled() {
            return Ok(BookingDto::from(booking));
        }

        let updated = self
            .booking_modifier()
            .update_status(&mut connection, &id, &BookingStatus::Cancelled)
            .await?;
        Ok(BookingDto::from(updated))
    }
}

impl<Connection: 'static + Send, T> CancelBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookingQuery<Connection>
        + DependOnBookingModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use super::validate_stay;
    use crate::transfer::CreateBookingDto;
    use kernel::KernelError;
    use time::macros::date;

    fn dto(
        room_id: Option<i64>,
        check_in: Option<&str>,
        check_out: Option<&str>,
    ) -> CreateBookingDto {
        CreateBookingDto {
            room_id,
            check_in: check_in.map(str::to_string),
            check_out: check_out.map(str::to_string),
        }
    }

    fn validation_message(dto: &CreateBookingDto) -> String {
        let report = validate_stay(dto).expect_err("expected validation failure");
        match report.current_context() {
            KernelError::Validation(message) => message.clone(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accepts_strictly_ordered_dates() {
        let (room_id, check_in, check_out) =
            validate_stay(&dto(Some(1), Some("2025-12-01"), Some("2025-12-03"))).unwrap();
        assert_eq!(i64::from(room_id), 1);
        assert_eq!(time::Date::from(check_in), date!(2025 - 12 - 01));
        assert_eq!(time::Date::from(check_out), date!(2025 - 12 - 03));
    }

    #[test]
    fn rejects_missing_fields() {
        for incomplete in [
            dto(None, Some("2025-12-01"), Some("2025-12-03")),
            dto(Some(1), None, Some("2025-12-03")),
            dto(Some(1), Some("2025-12-01"), None),
        ] {
            assert_eq!(
                validation_message(&incomplete),
                "roomId, checkIn and checkOut are required"
            );
        }
    }

    #[test]
    fn rejects_unparseable_dates() {
        let message = validation_message(&dto(Some(1), Some("not-a-date"), Some("2025-12-03")));
        assert_eq!(message, "invalid date format, expected YYYY-MM-DD");
    }

    #[test]
    fn rejects_check_in_on_or_after_check_out() {
        for (check_in, check_out) in [
            ("2025-12-01", "2025-11-30"),
            ("2025-12-01", "2025-12-01"),
        ] {
            let message = validation_message(&dto(Some(1), Some(check_in), Some(check_out)));
            assert_eq!(message, "check-in date must be before check-out date");
        }
    }
}
