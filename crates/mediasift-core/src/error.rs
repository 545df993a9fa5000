use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiftError {
    #[error("config error: {0}")]
    Config(String),

    #[error("policy error: {0}")]
    Policy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
