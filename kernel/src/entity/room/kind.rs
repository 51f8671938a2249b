use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Free-form category ("single", "double", ...), not an enum: the catalog is
/// seeded data and the store places no constraint on it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RoomType(String);

impl RoomType {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }
}
