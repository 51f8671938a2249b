mod booking;
mod hotel;
mod room;
mod user;

pub use self::{booking::*, hotel::*, room::*, user::*};
