use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
