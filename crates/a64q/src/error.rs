use a64q_isa::{CatalogError, OpcodeError};
use thiserror::Error;

/// Query errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid opcode: {0}")]
    Opcode(#[from] OpcodeError),
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
