mod booking;
mod common;
mod hotel;
mod room;
mod user;

pub use self::{booking::*, common::*, hotel::*, room::*, user::*};
