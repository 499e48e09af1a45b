//! Elliptic-curve key pairs for the ecpair library
//!
//! This crate provides:
//!
//! - [`CurveLayout`] and [`layout`]: the per-curve byte layout of the PKCS#8
//!   record produced by platform-native engines
//! - [`EcPublicKey`]: public coordinates with constant-time equality
//! - [`EcKeyPairData`]: a materialized key pair whose private scalar can be
//!   destroyed, together with its DER codec
//! - [`EcKeyPair`]: either materialized data or an [`OpaqueEcKeyPair`] held by
//!   an [`EcKeyBackend`], behind the same [`KeyPair`](ecpair_api::KeyPair)
//!   capability
//!
//! The elliptic-curve arithmetic itself (scalar multiplication, signing,
//! key agreement) is performed by the backend and is not part of this crate.

pub mod curve;
pub mod der;
pub mod key_pair;
pub mod key_pair_data;
pub mod public_key;

pub use curve::{layout, CurveLayout};
pub use key_pair::{EcKeyBackend, EcKeyPair, KeyHandle, OpaqueEcKeyPair};
pub use key_pair_data::EcKeyPairData;
pub use public_key::EcPublicKey;

pub use ecpair_api::{CurveId, Error, KeyPair, Result};
