//! Codec for the fixed PKCS#8 record of an elliptic-curve key pair
//!
//! The record is `prefix ++ d ++ middle ++ x ++ y` with the markers and the
//! field length taken from the curve's [`CurveLayout`]. It is not a general
//! ASN.1 parser: the producing engine does not document its output, so any
//! deviation from the one known shape is rejected instead of being
//! reinterpreted.
//!
//! # Security
//!
//! The encoded record contains the private scalar and is returned in a
//! [`Zeroizing`] buffer. Decoding errors name the marker, offset and curve;
//! the bytes found at the offset are only reported in builds with
//! `debug_assertions`.

use ecpair_api::{CurveId, EncodingDiagnostic, Error, Result, ResultExt};
use ecpair_common::SensitiveBuffer;
use ecpair_internal::constant_time::ct_eq;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::curve::{layout, CurveLayout};
use crate::key_pair_data::EcKeyPairData;
use crate::public_key::EcPublicKey;


/// Append one field element, normalized to the layout's field length
///
/// A value of exactly `number_length` bytes is copied as is. A value one byte
/// shorter gets one leading zero byte. Any other length fails with
/// [`Error::LengthMismatch`] naming `field`.
pub(crate) fn append_number(
    out: &mut Vec<u8>,
    layout: &CurveLayout,
    field: &'static str,
    value: &[u8],
    context: &'static str,
) -> Result<()> {
    let len = value.len();
    if len == layout.number_length {
        out.extend_from_slice(value);
    } else if len == layout.short_number_length() {
        out.push(0);
        out.extend_from_slice(value);
    } else {
        return Err(Error::LengthMismatch {
            context,
            field,
            expected: layout.number_length,
            actual: len,
        });
    }
    Ok(())
}

/// Verify that `marker` occurs in `der` at `offset`
fn check_marker(
    der: &[u8],
    layout: &CurveLayout,
    name: &'static str,
    marker: &[u8],
    offset: usize,
) -> Result<()> {
    const CONTEXT: &str = "EcKeyPairData::parse_der";

    let end = offset + marker.len();
    if der.len() < end {
        return Err(Error::LengthMismatch {
            context: CONTEXT,
            field: "der",
            expected: layout.der_len(),
            actual: der.len(),
        });
    }

    let found = &der[offset..end];
    if !ct_eq(found, marker) {
        warn!(
            curve = %layout.curve,
            marker = name,
            offset,
            "EC private key record does not match the known layout"
        );
        return Err(Error::UnsupportedEncoding {
            context: CONTEXT,
            curve: layout.curve,
            marker: name,
            offset,
            diagnostic: EncodingDiagnostic::marker_mismatch(marker, found),
        });
    }
    Ok(())
}

impl EcKeyPairData {
    /// Encode as the fixed PKCS#8 record of the key's curve
    ///
    /// `d`, `x` and `y` are normalized to the curve's field length; a field
    /// of [`CurveLayout::short_number_length`] bytes is left-padded with one
    /// zero byte.
    ///
    /// # Errors
    ///
    /// * [`Error::SecretUnavailable`] if the key has been destroyed
    /// * [`Error::LengthMismatch`] naming `d`, `x` or `y` if a field cannot be
    ///   normalized
    pub fn to_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        const CONTEXT: &str = "EcKeyPairData::to_der";

        let d = self.d().with_context(CONTEXT)?;
        let layout = layout(self.curve());

        // Reserve up front so the buffer never reallocates and leaves a copy behind
        let mut der = Zeroizing::new(Vec::with_capacity(layout.der_len()));
        der.extend_from_slice(layout.private_key_prefix);
        append_number(&mut der, layout, "d", d, CONTEXT)?;
        der.extend_from_slice(layout.private_key_middle);
        append_number(&mut der, layout, "x", self.x(), CONTEXT)?;
        append_number(&mut der, layout, "y", self.y(), CONTEXT)?;

        debug!(curve = %layout.curve, len = der.len(), "encoded EC private key record");
        Ok(der)
    }

    /// Decode a fixed PKCS#8 record produced for `curve`
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedEncoding`] if the prefix or middle marker differs
    ///   from the known layout
    /// * [`Error::LengthMismatch`] if the record is not exactly the curve's
    ///   record length
    pub fn parse_der(der: &[u8], curve: CurveId) -> Result<Self> {
        const CONTEXT: &str = "EcKeyPairData::parse_der";

        let layout = layout(curve);
        let n = layout.number_length;

        check_marker(der, layout, "prefix", layout.private_key_prefix, 0)?;
        let middle_index = layout.private_key_prefix.len() + n;
        check_marker(der, layout, "middle", layout.private_key_middle, middle_index)?;

        let d_index = layout.private_key_prefix.len();
        let x_index = middle_index + layout.private_key_middle.len();
        let y_index = x_index + n;
        if der.len() != y_index + n {
            return Err(Error::LengthMismatch {
                context: CONTEXT,
                field: "der",
                expected: y_index + n,
                actual: der.len(),
            });
        }

        let d = SensitiveBuffer::from_slice(&der[d_index..d_index + n]);
        let public_key = EcPublicKey::new(
            der[x_index..x_index + n].to_vec(),
            der[y_index..y_index + n].to_vec(),
            curve,
        );

        debug!(curve = %curve, len = der.len(), "decoded EC private key record");
        Ok(Self::from_parts(d, public_key))
    }
}
