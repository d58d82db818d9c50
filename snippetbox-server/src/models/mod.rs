//! Domain models with validation at construction
//!
//! Snippet form input is validated when these types are built.
//! Invalid input returns ValidationError, not panic.

pub mod snippet;
pub mod validation;

pub use snippet::{Expiry, NewSnippet, SnippetContent, SnippetTitle};
pub use validation::ValidationError;
