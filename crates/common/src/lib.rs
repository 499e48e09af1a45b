//! Common implementations and shared functionality for the ecpair library
//!
//! This crate holds the secret-handling discipline the key pair model relies
//! on: owned buffers that are erased exactly once and refuse reads afterwards.

pub mod security;

// Re-export core security types
pub use security::SensitiveBuffer;
