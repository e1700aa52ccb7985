// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No image selected")]
    MissingImage,
    #[error("Name is required")]
    MissingName,
    #[error("Card not found: {0}")]
    CardNotFound(String),
    #[error("Upload failed: {0}")]
    UploadFailed(String),
    #[error("Listing cards failed: {0}")]
    ListFailed(String),
    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}
