use thiserror::Error;

#[derive(Debug, Error)]
pub enum InteractorsError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[error("database connection pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    // a blocking database task panicked or was cancelled
    #[error("database task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    // the store doesn't know about the resource
    #[error("Invalid interaction resource: {0}")]
    InvalidResource(String),

    // the resource isn't in the per-request resource cache
    #[error("{0} not found")]
    ResourceNotResolved(String),
}

impl InteractorsError {
    pub fn is_data_access(&self) -> bool {
        matches!(self,
                 InteractorsError::Sqlite(_) |
                 InteractorsError::Postgres(_) |
                 InteractorsError::Pool(_) |
                 InteractorsError::Task(_))
    }
}

pub type InteractorsResult<T> = Result<T, InteractorsError>;
