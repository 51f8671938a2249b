mod id;
mod kind;
mod number;
mod price;

pub use self::{id::*, kind::*, number::*, price::*};
use crate::entity::hotel::HotelId;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Room {
    id: RoomId,
    hotel_id: HotelId,
    number: RoomNumber,
    kind: RoomType,
    price: RoomPrice,
}

impl Room {
    pub fn new(
        id: RoomId,
        hotel_id: HotelId,
        number: RoomNumber,
        kind: RoomType,
        price: RoomPrice,
    ) -> Self {
        Self {
            id,
            hotel_id,
            number,
            kind,
            price,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewRoom {
    hotel_id: HotelId,
    number: RoomNumber,
    kind: RoomType,
    price: RoomPrice,
}

impl NewRoom {
    pub fn new(hotel_id: HotelId, number: RoomNumber, kind: RoomType, price: RoomPrice) -> Self {
        Self {
            hotel_id,
            number,
            kind,
            price,
        }
    }
}
