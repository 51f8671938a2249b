use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct HotelCity(String);

impl HotelCity {
    pub fn new(city: impl Into<String>) -> Self {
        Self(city.into())
    }
}
