//! Key pair capability shared by materialized and backend-held keys
//!
//! Algorithms that consume a key pair only see this trait. Whether the
//! private scalar lives in process memory or behind a hardware or platform
//! backend is an implementation detail of the type behind it.

use crate::{CurveId, Result};
use async_trait::async_trait;

/// Asynchronous access to the material of an elliptic-curve key pair
///
/// Both operations may suspend: a backend-held key answers through a round
/// trip to its backend, while an in-memory key answers immediately. Calls are
/// single requests with no retry, and dropping the returned future cancels
/// the request.
///
/// # Errors
///
/// * [`Error::SecretUnavailable`](crate::Error::SecretUnavailable) when the
///   in-memory secret has been destroyed
/// * [`Error::Backend`](crate::Error::Backend) when a backend refuses or fails,
///   propagated exactly as the backend reported it
#[async_trait]
pub trait KeyPair: Send + Sync {
    /// Fully materialized key pair data
    type Data: Send;

    /// Public half of the key pair
    type PublicKey: Send;

    /// Curve this key pair belongs to
    fn curve(&self) -> CurveId;

    /// Obtain the private and public material
    async fn extract(&self) -> Result<Self::Data>;

    /// Obtain the public key only
    async fn extract_public_key(&self) -> Result<Self::PublicKey>;
}
