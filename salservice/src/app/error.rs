use server_common::db::ConnectError;

#[derive(Debug, thiserror::Error)]
pub enum QueryServiceError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Database error: {0}")]
    Connect(#[from] ConnectError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl QueryServiceError {
    /// Validation errors are the caller's fault and map to 400; everything
    /// else is reported as a generic database error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownTable(_))
    }
}
