use crate::transfer::{HotelDto, RoomDto};
use kernel::prelude::entity::{
    Booking, BookingDetails, BookingStatus, DestructBooking, DestructBookingDetails,
};
use time::Date;

/// Raw request fields. Presence and format are validated by the workflow,
/// not at the HTTP boundary.
#[derive(Debug, Clone)]
pub struct CreateBookingDto {
    pub room_id: Option<i64>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CancelBookingDto {
    pub id: i64,
}

#[derive(Debug, Clone)]
pub struct BookingDto {
    pub id: i64,
    pub user_id: i64,
    pub room_id: i64,
    pub check_in: Date,
    pub check_out: Date,
    pub status: BookingStatus,
    pub room: Option<RoomDto>,
    pub hotel: Option<HotelDto>,
}

impl From<Booking> for BookingDto {
    fn from(value: Booking) -> Self {
        let DestructBooking {
            id,
            user_id,
            room_id,
            check_in,
            check_out,
            status,
            ..
        } = value.into_destruct();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            room_id: room_id.into(),
            check_in: check_in.into(),
            check_out: check_out.into(),
            status,
            room: None,
            hotel: None,
        }
    }
}

impl From<BookingDetails> for BookingDto {
    fn from(value: BookingDetails) -> Self {
        let DestructBookingDetails {
            booking,
            room,
            hotel,
        } = value.into_destruct();
        let mut dto = Self::from(booking);
        dto.room = Some(RoomDto::from(room));
        dto.hotel = Some(HotelDto::from_parts(hotel, Vec::new()));
        dto
    }
}
