mod check_in;
mod check_out;
mod id;
mod status;

pub use self::{check_in::*, check_out::*, id::*, status::*};
use crate::entity::common::CreatedAt;
use crate::entity::hotel::Hotel;
use crate::entity::room::{Room, RoomId};
use crate::entity::user::UserId;
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, Mutation, References,
)]
pub struct Booking {
    id: BookingId,
    user_id: UserId,
    room_id: RoomId,
    check_in: CheckIn,
    check_out: CheckOut,
    status: BookingStatus,
    created_at: CreatedAt<Booking>,
}

impl Booking {
    pub fn new(
        id: BookingId,
        user_id: UserId,
        room_id: RoomId,
        check_in: CheckIn,
        check_out: CheckOut,
        status: BookingStatus,
        created_at: CreatedAt<Booking>,
    ) -> Self {
        Self {
            id,
            user_id,
            room_id,
            check_in,
            check_out,
            status,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewBooking {
    user_id: UserId,
    room_id: RoomId,
    check_in: CheckIn,
    check_out: CheckOut,
    status: BookingStatus,
}

impl NewBooking {
    pub fn new(
        user_id: UserId,
        room_id: RoomId,
        check_in: CheckIn,
        check_out: CheckOut,
        status: BookingStatus,
    ) -> Self {
        Self {
            user_id,
            room_id,
            check_in,
            check_out,
            status,
        }
    }
}

/// Booking joined with its room and the room's hotel, as one read model.
#[derive(Debug, Clone, Eq, PartialEq, Destructure, References)]
pub struct BookingDetails {
    booking: Booking,
    room: Room,
    hotel: Hotel,
}

impl BookingDetails {
    pub fn new(booking: Booking, room: Room, hotel: Hotel) -> Self {
        Self {
            booking,
            room,
            hotel,
        }
    }
}
