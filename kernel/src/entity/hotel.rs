mod address;
mod city;
mod id;
mod name;

pub use self::{address::*, city::*, id::*, name::*};
use crate::entity::common::CreatedAt;
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Hotel {
    id: HotelId,
    name: HotelName,
    city: HotelCity,
    address: HotelAddress,
    created_at: CreatedAt<Hotel>,
}

impl Hotel {
    pub fn new(
        id: HotelId,
        name: HotelName,
        city: HotelCity,
        address: HotelAddress,
        created_at: CreatedAt<Hotel>,
    ) -> Self {
        Self {
            id,
            name,
            city,
            address,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewHotel {
    name: HotelName,
    city: HotelCity,
    address: HotelAddress,
}

impl NewHotel {
    pub fn new(name: HotelName, city: HotelCity, address: HotelAddress) -> Self {
        Self {
            name,
            city,
            address,
        }
    }
}
