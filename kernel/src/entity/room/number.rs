use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Display label like "101". Kept textual, room numbers are not arithmetic.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RoomNumber(String);

impl RoomNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}
