//! Elliptic-curve public keys

use core::fmt;
use core::hash::{Hash, Hasher};

use ecpair_api::{CurveId, Error, Result, Serialize};
use ecpair_internal::constant_time::{ct_all, ct_eq_choice};
use ecpair_params::traditional::ec::SEC1_UNCOMPRESSED_TAG;

use crate::curve::layout;
use crate::der::append_number;

/// Public point of an elliptic-curve key pair
///
/// Coordinates are kept exactly as supplied; normalization to the curve's
/// field length only happens when encoding. Equality compares the curves and
/// then both coordinates in constant time.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcPublicKey {
    x: Vec<u8>,
    y: Vec<u8>,
    curve: CurveId,
}

impl EcPublicKey {
    /// Create a public key from big-endian affine coordinates
    pub fn new(x: Vec<u8>, y: Vec<u8>, curve: CurveId) -> Self {
        Self { x, y, curve }
    }

    /// The x coordinate
    pub fn x(&self) -> &[u8] {
        &self.x
    }

    /// The y coordinate
    pub fn y(&self) -> &[u8] {
        &self.y
    }

    /// The curve of this key
    pub fn curve(&self) -> CurveId {
        self.curve
    }

    /// Encode as an uncompressed SEC1 point, `0x04 ++ x ++ y`
    ///
    /// Coordinates are normalized to the record's field length with the same
    /// rule as the DER encoder.
    pub fn to_sec1_uncompressed(&self) -> Result<Vec<u8>> {
        const CONTEXT: &str = "EcPublicKey::to_sec1_uncompressed";

        let layout = layout(self.curve);
        let mut out = Vec::with_capacity(1 + 2 * layout.number_length);
        out.push(SEC1_UNCOMPRESSED_TAG);
        append_number(&mut out, layout, "x", &self.x, CONTEXT)?;
        append_number(&mut out, layout, "y", &self.y, CONTEXT)?;
        Ok(out)
    }

    /// Decode an uncompressed SEC1 point for `curve`
    ///
    /// Only the encoding is checked; whether the point lies on the curve is
    /// left to the backend that uses it.
    pub fn from_sec1_uncompressed(curve: CurveId, bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "EcPublicKey::from_sec1_uncompressed";

        let n = layout(curve).number_length;
        if bytes.len() != 1 + 2 * n {
            return Err(Error::LengthMismatch {
                context: CONTEXT,
                field: "point",
                expected: 1 + 2 * n,
                actual: bytes.len(),
            });
        }
        if bytes[0] != SEC1_UNCOMPRESSED_TAG {
            return Err(Error::InvalidParameter {
                context: CONTEXT,
                message: format!("expected uncompressed point tag 0x04, found {:#04x}", bytes[0]),
            });
        }

        let (x, y) = bytes[1..].split_at(n);
        Ok(Self::new(x.to_vec(), y.to_vec(), curve))
    }
}

impl PartialEq for EcPublicKey {
    fn eq(&self, other: &Self) -> bool {
        if self.curve != other.curve {
            return false;
        }
        let same = ct_all(&[ct_eq_choice(&self.x, &other.x), ct_eq_choice(&self.y, &other.y)]);
        same.into()
    }
}

impl Eq for EcPublicKey {}

impl Hash for EcPublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.curve.hash(state);
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl fmt::Debug for EcPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPublicKey")
            .field("curve", &self.curve)
            .field("x_len", &self.x.len())
            .field("y_len", &self.y.len())
            .finish()
    }
}

impl Serialize for EcPublicKey {
    fn from_bytes(curve: CurveId, bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_uncompressed(curve, bytes)
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        self.to_sec1_uncompressed()
    }
}
