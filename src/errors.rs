use thiserror::Error;

/// Errors that can occur when working with the Hugging Face Hub API.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Hub API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientError(String),
}

/// Errors that can occur when reading the source `.env` file.
#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("Failed to read env file {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Secret key validation failed: {0}")]
    SecretKey(String),
    #[error("Space id validation failed: {0}")]
    SpaceId(String),
    #[error("No Hugging Face token provided")]
    MissingToken,
}

impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => HubError::ApiError {
                status_code: status.as_u16(),
                message: err.to_string(),
            },
            None => HubError::HttpError(err.to_string()),
        }
    }
}
