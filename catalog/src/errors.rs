//! Error types for the catalog core

use thiserror::Error;

use crate::inquiry::ValidationErrors;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Item {item_id} is not in the current view")]
    ItemNotInView { item_id: String },

    #[error("Inquiry rejected: {0}")]
    InvalidInquiry(ValidationErrors),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
