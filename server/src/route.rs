mod booking;
mod health;
mod hotel;

pub use self::{booking::*, health::*, hotel::*};
