use thiserror::Error;

#[derive(Error, Debug)]
pub enum EchoError {
    #[error("Argument error: {0}")]
    Argument(#[from] clap::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EchoError>;

impl From<config::ConfigError> for EchoError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
