mod booking;
mod hotel;

pub use self::{booking::*, hotel::*};
