use std::path::PathBuf;
use thiserror::Error;

// missing or invalid environment configuration, reported before any I/O
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variables are missing: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("MP_SCHEME must be http or https, got '{0}'")]
    InvalidScheme(String),
}

// the source csv could not be turned into records
#[derive(Debug, Error)]
pub enum FileError {
    #[error("the file '{}' was not found", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid csv in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("the file '{}' has no header columns", .0.display())]
    EmptyHeader(PathBuf),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("a request error occurred during authentication: {detail}")]
    TransportFailure { detail: String },

    #[error("HTTP error {status} occurred during authentication")]
    HttpFailure { status: u16, body: String },

    #[error("'access_token' not found in the response")]
    MissingToken,

    #[error("failed to decode JSON response from token endpoint")]
    MalformedResponse { body: String },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a request error occurred during bulk import: {detail}")]
    TransportFailure { detail: String },

    #[error("HTTP error {status} occurred during bulk import")]
    HttpFailure { status: u16, body: String },

    #[error("failed to decode JSON response from bulk create endpoint")]
    MalformedResponse { body: String },
}

// any failure that ends a run
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl ImportError {
    // raw response body worth showing to the operator, if the server sent one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ImportError::Auth(AuthError::HttpFailure { body, .. })
            | ImportError::Auth(AuthError::MalformedResponse { body })
            | ImportError::Submit(SubmitError::HttpFailure { body, .. })
            | ImportError::Submit(SubmitError::MalformedResponse { body }) => Some(body),
            _ => None,
        }
    }
}
