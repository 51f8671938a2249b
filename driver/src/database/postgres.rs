use sqlx::pool::PoolConnection;
use sqlx::{Pool, Postgres};

use kernel::interface::database::QueryDatabaseConnection;
use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

pub use self::{booking::*, hotel::*, room::*, user::*};

mod booking;
mod hotel;
mod room;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL).convert_error()?;
        let pool = Pool::connect(&url).await.map_err(DriverError::from).convert_error()?;
        tracing::debug!("Running migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(DriverError::from)
            .convert_error()?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl QueryDatabaseConnection<PoolConnection<Postgres>> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PoolConnection<Postgres>, KernelError> {
        let con = self.pool.acquire().await.map_err(DriverError::from).convert_error()?;
        Ok(con)
    }
}
