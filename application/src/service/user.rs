use kernel::interface::query::UserQuery;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{NewUser, User, UserEmail, UserName, UserPassword};
use kernel::KernelError;

pub static DEFAULT_USER_EMAIL: &str = "guest@example.com";
static DEFAULT_USER_NAME: &str = "Guest User";
static DEFAULT_USER_PASSWORD: &str = "dummy-password";

/// Every booking is attributed to this single guest identity. Looks the user
/// up by the fixed email and creates it on first use. Racing first calls are
/// only kept apart by the unique index on the email column.
pub async fn get_or_create_default_user<Connection, Query, Modifier>(
    query: &Query,
    modifier: &Modifier,
    con: &mut Connection,
) -> error_stack::Result<User, KernelError>
where
    Connection: Send,
    Query: UserQuery<Connection>,
    Modifier: UserModifier<Connection>,
{
    let email = UserEmail::new(DEFAULT_USER_EMAIL);
    if let Some(user) = query.find_by_email(con, &email).await? {
        return Ok(user);
    }
    let user = NewUser::new(
        email,
        UserName::new(DEFAULT_USER_NAME),
        UserPassword::new(DEFAULT_USER_PASSWORD),
    );
    modifier.create(con, &user).await
}
