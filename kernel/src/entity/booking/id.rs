use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize, Fromln, AsRefln,
)]
pub struct BookingId(i64);

impl BookingId {
    pub fn new(id: impl Into<i64>) -> Self {
        Self(id.into())
    }
}
