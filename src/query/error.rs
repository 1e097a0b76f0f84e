use thiserror::Error;
use ts3_query::Ts3Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid query uri: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("unsupported uri scheme '{0}', expected 'serverquery'")]
    UnsupportedScheme(String),

    #[error("query uri has no host")]
    MissingHost,

    #[error("invalid server_port '{0}' in query uri")]
    InvalidServerPort(String),

    #[error("failed to connect to {addr}: {source}")]
    Connect { addr: String, source: Ts3Error },

    #[error("server returned error {id}: {message}")]
    Server { id: usize, message: String },

    #[error("query failed: {0}")]
    Client(Ts3Error),

    #[error("protocol error: {0}")]
    Protocol(String),
}

impl From<Ts3Error> for QueryError {
    fn from(e: Ts3Error) -> Self {
        match e.error_response() {
            Some(response) => Self::Server {
                id: response.id,
                message: response.msg.clone(),
            },
            None => Self::Client(e),
        }
    }
}
