//! Per-curve layout of the PKCS#8 record emitted by native engines
//!
//! The table is built from constants at compile time and never mutated.
//! Supporting another curve means adding another entry here; nothing is
//! discovered at runtime.

use ecpair_api::CurveId;
use ecpair_params::traditional::ec::*;

/// Byte layout of the private key record for one curve
#[derive(Debug, PartialEq, Eq)]
pub struct CurveLayout {
    /// Curve the layout belongs to
    pub curve: CurveId,
    /// Bytes preceding `d`
    pub private_key_prefix: &'static [u8],
    /// Bytes between `d` and `x`
    pub private_key_middle: &'static [u8],
    /// Length of each of `d`, `x` and `y` in the record
    pub number_length: usize,
}

impl CurveLayout {
    /// Field length one byte short of `number_length`
    ///
    /// A minimal big-endian value whose top byte was zero arrives with this
    /// length; encoders restore it with a single leading zero byte.
    pub const fn short_number_length(&self) -> usize {
        self.number_length - 1
    }

    /// Offset of `d`
    pub const fn d_offset(&self) -> usize {
        self.private_key_prefix.len()
    }

    /// Offset of the middle marker
    pub const fn middle_offset(&self) -> usize {
        self.d_offset() + self.number_length
    }

    /// Offset of `x`
    pub const fn x_offset(&self) -> usize {
        self.middle_offset() + self.private_key_middle.len()
    }

    /// Offset of `y`
    pub const fn y_offset(&self) -> usize {
        self.x_offset() + self.number_length
    }

    /// Exact length of a complete record
    pub const fn der_len(&self) -> usize {
        self.y_offset() + self.number_length
    }
}

static P256_LAYOUT: CurveLayout = CurveLayout {
    curve: CurveId::P256,
    private_key_prefix: &P256_PRIVATE_KEY_PREFIX,
    private_key_middle: &P256_PRIVATE_KEY_MIDDLE,
    number_length: P256_NUMBER_LENGTH,
};

static P384_LAYOUT: CurveLayout = CurveLayout {
    curve: CurveId::P384,
    private_key_prefix: &P384_PRIVATE_KEY_PREFIX,
    private_key_middle: &P384_PRIVATE_KEY_MIDDLE,
    number_length: P384_NUMBER_LENGTH,
};

static P521_LAYOUT: CurveLayout = CurveLayout {
    curve: CurveId::P521,
    private_key_prefix: &P521_PRIVATE_KEY_PREFIX,
    private_key_middle: &P521_PRIVATE_KEY_MIDDLE,
    number_length: P521_NUMBER_LENGTH,
};

/// Look up the layout for a curve
pub fn layout(curve: CurveId) -> &'static CurveLayout {
    match curve {
        CurveId::P256 => &P256_LAYOUT,
        CurveId::P384 => &P384_LAYOUT,
        CurveId::P521 => &P521_LAYOUT,
    }
}
