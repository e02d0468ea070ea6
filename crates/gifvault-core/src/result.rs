//! Result type aliases for GifVault.

use crate::GifVaultError;

/// A specialized `Result` type for GifVault operations.
pub type GifVaultResult<T> = Result<T, GifVaultError>;
