//! Trait definitions for the key pair model

pub mod keypair;
pub mod serialize;

pub use keypair::KeyPair;
pub use serialize::{Serialize, SerializeSecret};
