mod booking;
mod hotel;
mod user;

pub use self::{booking::*, hotel::*, user::*};
