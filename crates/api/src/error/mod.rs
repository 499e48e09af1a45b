//! Error handling for the key pair model and its codec

pub mod types;
pub mod traits;

// Re-export the primary error type and result
pub use types::{EncodingDiagnostic, Error, Result};

// Re-export error traits
pub use traits::ResultExt;
