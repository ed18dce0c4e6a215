use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("recipe catalog not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read recipe catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed recipe catalog: {0}")]
    Format(#[from] serde_json::Error),
}
