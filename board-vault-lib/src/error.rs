use board_vault_db::{OperationError, SchemaError};
use thiserror::Error;

/// Errors from collection and statistics operations.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Storage operation failed, or a single-entity rule was violated
    /// (`DuplicateGame`, `NotFound`)
    #[error("{0}")]
    Db(#[from] OperationError),

    /// Database could not be opened
    #[error("Storage unavailable: {0}")]
    Storage(#[from] SchemaError),

    /// Empty or whitespace-only game name
    #[error("Game name must not be blank")]
    BlankName,
}

impl VaultError {
    /// True for `DuplicateGame`/`NotFound`/`BlankName`: reported to the user,
    /// not fatal.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            VaultError::BlankName
                | VaultError::Db(OperationError::DuplicateGame(_))
                | VaultError::Db(OperationError::NotFound(_))
        )
    }
}
