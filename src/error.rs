use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum CatalogError {
    #[error("Extension file not found: {}", .0.display())]
    ExtensionNotFound(PathBuf),

    #[error("Spec #{0} has neither model keys nor a default category")]
    UnreachableSpec(usize),

    #[error("Spec #{index} has an empty model key")]
    EmptyModelKey { index: usize },

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
