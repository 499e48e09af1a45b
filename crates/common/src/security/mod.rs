//! Security primitives and memory safety utilities
//!
//! This module provides the types that own sensitive cryptographic material
//! on behalf of the rest of the ecpair ecosystem.

pub mod secret;

// Re-export core security types
pub use secret::SensitiveBuffer;
