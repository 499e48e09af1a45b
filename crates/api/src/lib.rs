//! Public API traits and types for the ecpair library
//!
//! This crate provides the public API surface shared by every ecpair crate:
//! the error taxonomy, the curve identifier, the byte serialization
//! contracts and the asynchronous key pair capability.

pub mod traits;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{EncodingDiagnostic, Error, Result, ResultExt};
pub use types::CurveId;

// Re-export all traits from the traits module
pub use traits::{KeyPair, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{keypair, serialize};

// The capability trait is declared with this macro; implementors need it too
pub use async_trait::async_trait;
