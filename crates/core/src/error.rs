use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignpostError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("codegen error: {0}")]
    Codegen(String),
    #[error("environment error: {0}")]
    Env(String),
}

pub type Result<T> = std::result::Result<T, SignpostError>;
