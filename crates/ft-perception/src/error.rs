use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerceptionError {
    #[error("cover inventory parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PerceptionResult<T> = Result<T, PerceptionError>;
