mod email;
mod id;
mod name;
mod password;

pub use self::{email::*, id::*, name::*, password::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct User {
    id: UserId,
    email: UserEmail,
    name: UserName,
    password: UserPassword,
}

impl User {
    pub fn new(id: UserId, email: UserEmail, name: UserName, password: UserPassword) -> Self {
        Self {
            id,
            email,
            name,
            password,
        }
    }
}

/// Column values for a user row the store has not assigned an id to yet.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct NewUser {
    email: UserEmail,
    name: UserName,
    password: UserPassword,
}

impl NewUser {
    pub fn new(email: UserEmail, name: UserName, password: UserPassword) -> Self {
        Self {
            email,
            name,
            password,
        }
    }
}
