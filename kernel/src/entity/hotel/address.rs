use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct HotelAddress(String);

impl HotelAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}
