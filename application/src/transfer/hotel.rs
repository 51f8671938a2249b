use kernel::prelude::entity::{DestructHotel, DestructRoom, Hotel, Room};
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct RoomDto {
    pub id: i64,
    pub hotel_id: i64,
    pub number: String,
    pub kind: String,
    pub price: i64,
}

impl From<Room> for RoomDto {
    fn from(value: Room) -> Self {
        let DestructRoom {
            id,
            hotel_id,
            number,
            kind,
            price,
        } = value.into_destruct();
        Self {
            id: id.into(),
            hotel_id: hotel_id.into(),
            number: number.into(),
            kind: kind.into(),
            price: price.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HotelDto {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub address: String,
    pub created_at: OffsetDateTime,
    pub rooms: Vec<RoomDto>,
}

impl HotelDto {
    pub fn from_parts(hotel: Hotel, rooms: Vec<Room>) -> Self {
        let DestructHotel {
            id,
            name,
            city,
            address,
            created_at,
        } = hotel.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            address: address.into(),
            created_at: created_at.into_inner(),
            rooms: rooms.into_iter().map(RoomDto::from).collect(),
        }
    }
}
