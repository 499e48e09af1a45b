//! Materialized and backend-held key pairs behind one capability
//!
//! A key generated or imported by a platform backend may come back with its
//! private scalar in memory ([`EcKeyPairData`]) or only as a handle whose
//! scalar stays with the backend ([`OpaqueEcKeyPair`]), for instance when it
//! is hardware-protected. [`EcKeyPair`] carries either one and implements
//! [`KeyPair`] by dispatching to the variant.

use core::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use ecpair_api::{CurveId, Error, KeyPair, Result};
use tracing::debug;

use crate::key_pair_data::EcKeyPairData;
use crate::public_key::EcPublicKey;


/// Backend-assigned identifier of a key whose secret is not in memory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyHandle(String);

impl KeyHandle {
    /// Wrap a backend identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The backend identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collaborator that owns opaque keys
///
/// Implementations forward the request to a platform or hardware engine.
/// Whatever error they return reaches the caller of
/// [`OpaqueEcKeyPair::extract`] or [`OpaqueEcKeyPair::extract_public_key`]
/// unchanged; a backend that cannot export private keys should answer
/// `extract` with [`Error::Backend`].
#[async_trait]
pub trait EcKeyBackend: Send + Sync + fmt::Debug {
    /// Export the private and public material of `handle`
    async fn extract(&self, handle: &KeyHandle, curve: CurveId) -> Result<EcKeyPairData>;

    /// Export the public key of `handle`
    async fn extract_public_key(&self, handle: &KeyHandle, curve: CurveId) -> Result<EcPublicKey>;
}

/// Key pair whose private scalar is held by an [`EcKeyBackend`]
#[derive(Clone, Debug)]
pub struct OpaqueEcKeyPair {
    handle: KeyHandle,
    curve: CurveId,
    backend: Arc<dyn EcKeyBackend>,
}

impl OpaqueEcKeyPair {
    /// Refer to key `handle` on `curve` held by `backend`
    pub fn new(handle: KeyHandle, curve: CurveId, backend: Arc<dyn EcKeyBackend>) -> Self {
        Self {
            handle,
            curve,
            backend,
        }
    }

    /// The backend identifier of this key
    pub fn handle(&self) -> &KeyHandle {
        &self.handle
    }
}

fn check_curve(context: &'static str, expected: CurveId, actual: CurveId) -> Result<()> {
    if expected != actual {
        return Err(Error::InvalidParameter {
            context,
            message: format!("backend returned a {} key for a {} handle", actual, expected),
        });
    }
    Ok(())
}

#[async_trait]
impl KeyPair for OpaqueEcKeyPair {
    type Data = EcKeyPairData;
    type PublicKey = EcPublicKey;

    fn curve(&self) -> CurveId {
        self.curve
    }

    async fn extract(&self) -> Result<EcKeyPairData> {
        debug!(curve = %self.curve, handle = %self.handle, "extracting opaque key pair");
        let data = self.backend.extract(&self.handle, self.curve).await?;
        check_curve("OpaqueEcKeyPair::extract", self.curve, data.curve())?;
        Ok(data)
    }

    async fn extract_public_key(&self) -> Result<EcPublicKey> {
        debug!(curve = %self.curve, handle = %self.handle, "extracting opaque public key");
        let public_key = self
            .backend
            .extract_public_key(&self.handle, self.curve)
            .await?;
        check_curve("OpaqueEcKeyPair::extract_public_key", self.curve, public_key.curve())?;
        Ok(public_key)
    }
}

/// An elliptic-curve key pair, materialized or opaque
#[derive(Debug)]
pub enum EcKeyPair {
    /// Private scalar available in memory
    Materialized(EcKeyPairData),
    /// Private scalar held by a backend
    Opaque(OpaqueEcKeyPair),
}

impl EcKeyPair {
    /// Whether the private scalar is held in memory
    pub fn is_materialized(&self) -> bool {
        matches!(self, EcKeyPair::Materialized(_))
    }

    /// Borrow the in-memory data of a materialized key pair
    pub fn as_data(&self) -> Option<&EcKeyPairData> {
        match self {
            EcKeyPair::Materialized(data) => Some(data),
            EcKeyPair::Opaque(_) => None,
        }
    }

    /// Destroy the in-memory secret; opaque keys are left to their backend
    pub fn destroy(&mut self) {
        if let EcKeyPair::Materialized(data) = self {
            data.destroy();
        }
    }
}

impl From<EcKeyPairData> for EcKeyPair {
    fn from(data: EcKeyPairData) -> Self {
        EcKeyPair::Materialized(data)
    }
}

impl From<OpaqueEcKeyPair> for EcKeyPair {
    fn from(opaque: OpaqueEcKeyPair) -> Self {
        EcKeyPair::Opaque(opaque)
    }
}

#[async_trait]
impl KeyPair for EcKeyPair {
    type Data = EcKeyPairData;
    type PublicKey = EcPublicKey;

    fn curve(&self) -> CurveId {
        match self {
            EcKeyPair::Materialized(data) => data.curve(),
            EcKeyPair::Opaque(opaque) => opaque.curve,
        }
    }

    async fn extract(&self) -> Result<EcKeyPairData> {
        match self {
            EcKeyPair::Materialized(data) => data.extract().await,
            EcKeyPair::Opaque(opaque) => opaque.extract().await,
        }
    }

    async fn extract_public_key(&self) -> Result<EcPublicKey> {
        match self {
            EcKeyPair::Materialized(data) => data.extract_public_key().await,
            EcKeyPair::Opaque(opaque) => opaque.extract_public_key().await,
        }
    }
}
