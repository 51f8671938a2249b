use crate::controller::Exhaust;
use application::transfer::{HotelDto, RoomDto};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    id: i64,
    hotel_id: i64,
    room_number: String,
    #[serde(rename = "type")]
    room_type: String,
    price: i64,
}

impl From<RoomDto> for RoomResponse {
    fn from(value: RoomDto) -> Self {
        Self {
            id: value.id,
            hotel_id: value.hotel_id,
            room_number: value.number,
            room_type: value.kind,
            price: value.price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    id: i64,
    name: String,
    city: String,
    address: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    // Always present, clients iterate over it without a null check.
    rooms: Vec<RoomResponse>,
}

impl From<HotelDto> for HotelResponse {
    fn from(value: HotelDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            city: value.city,
            address: value.address,
            created_at: value.created_at,
            rooms: value.rooms.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

impl IntoResponse for HotelResponse {
    fn into_response(self) -> Response {
        (axum::http::StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct HotelPresenter;

impl Exhaust<HotelDto> for HotelPresenter {
    type To = HotelResponse;
    fn emit(&self, input: HotelDto) -> Self::To {
        HotelResponse::from(input)
    }
}

impl Exhaust<Vec<HotelDto>> for HotelPresenter {
    type To = axum::Json<Vec<HotelResponse>>;
    fn emit(&self, input: Vec<HotelDto>) -> Self::To {
        axum::Json::from(
            input
                .into_iter()
                .map(HotelResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::HotelResponse;
    use application::transfer::HotelDto;
    use time::macros::datetime;

    fn dto() -> HotelDto {
        HotelDto {
            id: 1,
            name: "Test Hotel".to_string(),
            city: "Seoul".to_string(),
            address: "123 Test Street".to_string(),
            created_at: datetime!(2025-12-01 00:00:00 UTC),
            rooms: Vec::new(),
        }
    }

    #[test]
    fn hotel_without_rooms_still_serializes_an_empty_array() {
        let value = serde_json::to_value(HotelResponse::from(dto())).unwrap();
        assert_eq!(value["name"], "Test Hotel");
        assert_eq!(value["rooms"], serde_json::json!([]));
    }
}
