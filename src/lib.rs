//! # ecpair
//! 
//! The elliptic-curve key pair model of a cross-platform cryptography
//! interface: private scalars with a one-way destroyed state, public keys
//! with constant-time equality, and a byte-exact codec for the PKCS#8
//! records platform-native engines export.
//! 
//! ## Usage
//! 
//! ```rust
//! use ecpair::prelude::*;
//!
//! let key = EcKeyPairData::new(vec![0x01; 32], vec![0x02; 32], vec![0x03; 32], CurveId::P256);
//! let der = key.to_der()?;
//! assert_eq!(EcKeyPairData::parse_der(&der, CurveId::P256)?, key);
//! # Ok::<(), ecpair::api::Error>(())
//! ```
//! 
//! ## Features
//! 
//! - `std` (default): Standard library support
//! - `serde`: Serde support for curve identifiers and public keys
//! - `full`: All features enabled
//! 
//! ## Crate Structure
//! 
//! This is a facade crate that re-exports functionality from several sub-crates:
//! 
//! - [`ecpair-api`]: Error taxonomy, curve identifiers and the `KeyPair` capability
//! - [`ecpair-common`]: Secret buffers
//! - [`ecpair-params`]: Per-curve layout constants
//! - [`ecpair-keys`]: Public keys, key pair data, the DER codec and opaque keys

// Core re-exports (always available)
pub use ecpair_api as api;
pub use ecpair_common as common;
pub use ecpair_internal as internal;
pub use ecpair_keys as keys;
pub use ecpair_params as params;

pub use zeroize;

/// Common imports for ecpair users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{CurveId, Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyPair, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::SensitiveBuffer;
    pub use zeroize::Zeroizing;

    // Re-export key types
    pub use crate::keys::{
        layout, CurveLayout, EcKeyBackend, EcKeyPair, EcKeyPairData, EcPublicKey, KeyHandle,
        OpaqueEcKeyPair,
    };
}
