use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Nightly price as an integer amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct RoomPrice(i64);

impl RoomPrice {
    pub fn new(price: impl Into<i64>) -> Self {
        Self(price.into())
    }
}
