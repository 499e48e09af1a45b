//! Curve identifiers shared across the ecpair crates

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// Identifier of a supported elliptic curve
///
/// The set is closed: a curve is only supported once the DER layout of the
/// native producer is known for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveId {
    /// NIST P-256 (secp256r1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// NIST P-521 (secp521r1)
    P521,
}

impl CurveId {
    /// Every supported curve, smallest first
    pub const ALL: [CurveId; 3] = [CurveId::P256, CurveId::P384, CurveId::P521];

    /// Short lowercase name, e.g. `p256`
    pub const fn name(self) -> &'static str {
        match self {
            CurveId::P256 => "p256",
            CurveId::P384 => "p384",
            CurveId::P521 => "p521",
        }
    }

    /// NIST display name, e.g. `P-256`
    pub const fn display_name(self) -> &'static str {
        match self {
            CurveId::P256 => "P-256",
            CurveId::P384 => "P-384",
            CurveId::P521 => "P-521",
        }
    }

    /// Size of the underlying prime field in bits
    pub const fn field_bits(self) -> usize {
        match self {
            CurveId::P256 => 256,
            CurveId::P384 => 384,
            CurveId::P521 => 521,
        }
    }

    /// Minimal byte length able to hold one field element
    pub const fn scalar_len(self) -> usize {
        (self.field_bits() + 7) / 8
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    /// Accepts both `p256` and `P-256` spellings, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        CurveId::ALL
            .into_iter()
            .find(|curve| {
                s.eq_ignore_ascii_case(curve.name()) || s.eq_ignore_ascii_case(curve.display_name())
            })
            .ok_or_else(|| Error::InvalidParameter {
                context: "CurveId::from_str",
                message: format!("unknown curve `{}`", s),
            })
    }
}
