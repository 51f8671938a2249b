use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Fromln,
    AsRefln,
)]
pub struct CheckIn(Date);

impl CheckIn {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
