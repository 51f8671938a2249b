use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, Postgres};

use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{NewUser, User, UserEmail, UserId, UserName, UserPassword};
use kernel::KernelError;

use crate::database::PostgresDatabase;
use crate::error::{ConvertError, DriverError};

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery<PoolConnection<Postgres>> for PostgresUserRepository {
    async fn find_by_id(
        &self,
        con: &mut PoolConnection<Postgres>,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_id(con, id).await.convert_error()
    }

    async fn find_by_email(
        &self,
        con: &mut PoolConnection<Postgres>,
        email: &UserEmail,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_email(con, email)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl UserModifier<PoolConnection<Postgres>> for PostgresUserRepository {
    async fn create(
        &self,
        con: &mut PoolConnection<Postgres>,
        user: &NewUser,
    ) -> error_stack::Result<User, KernelError> {
        PgUserInternal::create(con, user).await.convert_error()
    }
}

impl DependOnUserQuery<PoolConnection<Postgres>> for PostgresDatabase {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

impl DependOnUserModifier<PoolConnection<Postgres>> for PostgresDatabase {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &PostgresUserRepository
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        User::new(
            UserId::new(value.id),
            UserEmail::new(value.email),
            UserName::new(value.name),
            UserPassword::new(value.password),
        )
    }
}

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn find_by_id(con: &mut PgConnection, id: &UserId) -> Result<Option<User>, DriverError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT id, email, name, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_by_email(
        con: &mut PgConnection,
        email: &UserEmail,
    ) -> Result<Option<User>, DriverError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT id, email, name, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_ref())
        .fetch_optional(con)
        .await?;
        Ok(row.map(User::from))
    }

    async fn create(con: &mut PgConnection, user: &NewUser) -> Result<User, DriverError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            INSERT INTO users (email, name, password)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, password
            "#,
        )
        .bind(user.email().as_ref())
        .bind(user.name().as_ref())
        .bind(user.password().as_ref())
        .fetch_one(con)
        .await?;
        Ok(User::from(row))
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::QueryDatabaseConnection;
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{NewUser, UserEmail, UserName, UserPassword};
    use kernel::KernelError;

    use crate::database::postgres::user::PostgresUserRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let email = UserEmail::new(format!("user-{}@example.com", std::process::id()));
        let user = NewUser::new(
            email.clone(),
            UserName::new("Test User".to_string()),
            UserPassword::new("dummy".to_string()),
        );
        let created = PostgresUserRepository.create(&mut con, &user).await?;
        assert_eq!(created.email(), &email);

        let found = PostgresUserRepository
            .find_by_email(&mut con, &email)
            .await?;
        assert_eq!(found, Some(created.clone()));

        let found = PostgresUserRepository
            .find_by_id(&mut con, created.id())
            .await?;
        assert_eq!(found, Some(created));

        Ok(())
    }
}
