use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Placeholder credential. Nothing in this system hashes or verifies it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct UserPassword(String);

impl UserPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}
