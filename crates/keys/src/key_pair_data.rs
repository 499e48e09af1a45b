//! Materialized elliptic-curve key pairs

use core::fmt;
use core::hash::{Hash, Hasher};

use async_trait::async_trait;
use ecpair_api::{CurveId, Error, KeyPair, Result, ResultExt, SerializeSecret};
use ecpair_common::SensitiveBuffer;
use ecpair_internal::constant_time::ct_eq;
use zeroize::Zeroizing;

use crate::public_key::EcPublicKey;

/// Private scalar and public point of an elliptic-curve key pair
///
/// The scalar `d` is owned by a [`SensitiveBuffer`] and can be erased with
/// [`destroy`](Self::destroy); it is also erased when the value is dropped.
/// Coordinates are kept as supplied and only normalized by the encoders.
///
/// # Equality
///
/// Two key pairs are equal when their public keys are equal and either both
/// secrets are live and equal, or both have been destroyed. All byte
/// comparisons are constant-time. The debug label never takes part.
pub struct EcKeyPairData {
    d: SensitiveBuffer,
    public_key: EcPublicKey,
    debug_label: Option<String>,
}

impl EcKeyPairData {
    /// Create a key pair, taking ownership of the private scalar `d`
    pub fn new(d: Vec<u8>, x: Vec<u8>, y: Vec<u8>, curve: CurveId) -> Self {
        Self::from_parts(SensitiveBuffer::new(d), EcPublicKey::new(x, y, curve))
    }

    pub(crate) fn from_parts(d: SensitiveBuffer, public_key: EcPublicKey) -> Self {
        Self {
            d,
            public_key,
            debug_label: None,
        }
    }

    /// Attach a label shown by `Debug`
    pub fn with_debug_label(mut self, label: impl Into<String>) -> Self {
        self.debug_label = Some(label.into());
        self
    }

    /// The debug label, if any
    pub fn debug_label(&self) -> Option<&str> {
        self.debug_label.as_deref()
    }

    /// The private scalar
    ///
    /// # Errors
    ///
    /// [`Error::SecretUnavailable`] once the key has been destroyed.
    pub fn d(&self) -> Result<&[u8]> {
        self.d.bytes().with_context("EcKeyPairData::d")
    }

    /// The x coordinate of the public point
    pub fn x(&self) -> &[u8] {
        self.public_key.x()
    }

    /// The y coordinate of the public point
    pub fn y(&self) -> &[u8] {
        self.public_key.y()
    }

    /// The curve of this key pair
    pub fn curve(&self) -> CurveId {
        self.public_key.curve()
    }

    /// The public half, available even after the secret is destroyed
    pub fn public_key(&self) -> &EcPublicKey {
        &self.public_key
    }

    /// Whether [`destroy`](Self::destroy) has been called
    pub fn has_been_destroyed(&self) -> bool {
        self.d.has_been_destroyed()
    }

    /// Erase the private scalar; later reads of `d` fail
    pub fn destroy(&mut self) {
        self.d.destroy();
    }

    /// Make an independent copy that shares no secret storage with `self`
    ///
    /// # Errors
    ///
    /// [`Error::SecretUnavailable`] once the key has been destroyed.
    pub fn copy(&self) -> Result<Self> {
        Ok(Self {
            d: self.d.try_clone().with_context("EcKeyPairData::copy")?,
            public_key: self.public_key.clone(),
            debug_label: self.debug_label.clone(),
        })
    }
}

impl PartialEq for EcKeyPairData {
    fn eq(&self, other: &Self) -> bool {
        if self.public_key != other.public_key {
            return false;
        }
        match (self.d.bytes(), other.d.bytes()) {
            (Ok(a), Ok(b)) => ct_eq(a, b),
            // Both erased: destroyed keys are indistinguishable placeholders
            (Err(_), Err(_)) => true,
            _ => false,
        }
    }
}

impl Eq for EcKeyPairData {}

impl Hash for EcKeyPairData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.public_key.hash(state);
    }
}

impl fmt::Debug for EcKeyPairData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = if self.has_been_destroyed() {
            "[DESTROYED]"
        } else {
            "[REDACTED]"
        };
        f.debug_struct("EcKeyPairData")
            .field("curve", &self.curve())
            .field("d", &d)
            .field("public_key", &self.public_key)
            .field("debug_label", &self.debug_label)
            .finish()
    }
}

#[async_trait]
impl KeyPair for EcKeyPairData {
    type Data = EcKeyPairData;
    type PublicKey = EcPublicKey;

    fn curve(&self) -> CurveId {
        self.public_key.curve()
    }

    /// Returns an independent copy of this key pair
    async fn extract(&self) -> Result<EcKeyPairData> {
        self.copy().with_context("EcKeyPairData::extract")
    }

    async fn extract_public_key(&self) -> Result<EcPublicKey> {
        if self.has_been_destroyed() {
            return Err(Error::SecretUnavailable {
                context: "EcKeyPairData::extract_public_key",
            });
        }
        Ok(self.public_key.clone())
    }
}

impl SerializeSecret for EcKeyPairData {
    fn from_bytes(curve: CurveId, bytes: &[u8]) -> Result<Self> {
        Self::parse_der(bytes, curve)
    }

    fn to_bytes_zeroizing(&self) -> Result<Zeroizing<Vec<u8>>> {
        self.to_der()
    }
}
