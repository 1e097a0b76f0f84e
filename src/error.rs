use thiserror::Error;

use crate::config::ConfigError;
use crate::options::ValidationError;
use crate::query::QueryError;

#[derive(Debug, Error)]
pub enum Ts3ScanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl From<url::ParseError> for Ts3ScanError {
    fn from(e: url::ParseError) -> Self {
        Self::Query(QueryError::InvalidUri(e))
    }
}
