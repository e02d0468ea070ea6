//! JWT issuing and validation.

pub mod claims;
pub mod token_provider;

pub use claims::*;
pub use token_provider::*;
