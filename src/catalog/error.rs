use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl CatalogError {
    /// HTTP status this error maps to. Only a missing record is a client error;
    /// everything else is reported as a server failure.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::GameNotFound(_) => 404,
            CatalogError::Io(_) | CatalogError::Decode(_) | CatalogError::Store(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
