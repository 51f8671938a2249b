use crate::controller::Exhaust;
use crate::response::{HotelResponse, RoomResponse};
use application::transfer::BookingDto;
use axum::response::{IntoResponse, Response};
use kernel::prelude::entity::BookingStatus;
use serde::Serialize;
use time::Date;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    id: i64,
    user_id: i64,
    room_id: i64,
    check_in: Date,
    check_out: Date,
    status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    room: Option<RoomResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hotel: Option<HotelResponse>,
}

impl From<BookingDto> for BookingResponse {
    fn from(value: BookingDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            room_id: value.room_id,
            check_in: value.check_in,
            check_out: value.check_out,
            status: value.status,
            room: value.room.map(RoomResponse::from),
            hotel: value.hotel.map(HotelResponse::from),
        }
    }
}

impl IntoResponse for BookingResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedBookingResponse(BookingResponse);

impl IntoResponse for CreatedBookingResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::CREATED, axum::Json(self.0)).into_response()
    }
}

pub struct BookingPresenter;

impl Exhaust<BookingDto> for BookingPresenter {
    type To = BookingResponse;
    fn emit(&self, input: BookingDto) -> Self::To {
        BookingResponse::from(input)
    }
}

impl Exhaust<Vec<BookingDto>> for BookingPresenter {
    type To = axum::Json<Vec<BookingResponse>>;
    fn emit(&self, input: Vec<BookingDto>) -> Self::To {
        axum::Json::from(
            input
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}

pub struct CreatedBookingPresenter;

impl Exhaust<BookingDto> for CreatedBookingPresenter {
    type To = CreatedBookingResponse;
    fn emit(&self, input: BookingDto) -> Self::To {
        CreatedBookingResponse(BookingResponse::from(input))
    }
}

#[cfg(test)]
mod test {
    use super::BookingResponse;
    use application::transfer::BookingDto;
    use kernel::prelude::entity::BookingStatus;
    use time::macros::date;

    fn dto() -> BookingDto {
        BookingDto {
            id: 7,
            user_id: 1,
            room_id: 3,
            check_in: date!(2025 - 12 - 01),
            check_out: date!(2025 - 12 - 03),
            status: BookingStatus::Confirmed,
            room: None,
            hotel: None,
        }
    }

    #[test]
    fn booking_serializes_with_camel_case_keys_and_iso_dates() {
        let value = serde_json::to_value(BookingResponse::from(dto())).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["userId"], 1);
        assert_eq!(value["roomId"], 3);
        assert_eq!(value["checkIn"], "2025-12-01");
        assert_eq!(value["checkOut"], "2025-12-03");
        assert_eq!(value["status"], "confirmed");
    }

    #[test]
    fn absent_relations_are_omitted() {
        let value = serde_json::to_value(BookingResponse::from(dto())).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("room"));
        assert!(!object.contains_key("hotel"));
    }
}
