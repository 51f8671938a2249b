use crate::entity::{NewUser, User};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier<Connection>: 'static + Sync + Send {
    /// Inserts the row and returns it with the store-assigned id.
    async fn create(
        &self,
        con: &mut Connection,
        user: &NewUser,
    ) -> error_stack::Result<User, KernelError>;
}

pub trait DependOnUserModifier<Connection>: 'static + Sync + Send {
    type UserModifier: UserModifier<Connection>;
    fn user_modifier(&self) -> &Self::UserModifier;
}
