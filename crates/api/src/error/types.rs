//! Error type definitions for key pair operations

use core::fmt;
use thiserror::Error;

use crate::types::CurveId;

/// Primary error type for key pair operations
///
/// Every failure at this layer is final: nothing here is retried and no
/// malformed input is coerced into shape. Messages name the field, curve or
/// offset that failed but never carry secret scalar bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The private scalar was read after the key was destroyed
    #[error("{context}: private key has been destroyed")]
    SecretUnavailable {
        context: &'static str,
    },

    /// A fixed marker of the DER layout did not match the known producer output
    #[error("{context}: unsupported {curve} key encoding, {marker} marker mismatch at offset {offset}{diagnostic}")]
    UnsupportedEncoding {
        context: &'static str,
        curve: CurveId,
        marker: &'static str,
        offset: usize,
        diagnostic: EncodingDiagnostic,
    },

    /// A field or a whole encoding does not have the length the curve requires
    #[error("{context}: `{field}` has invalid length (expected {expected}, got {actual})")]
    LengthMismatch {
        context: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Failure reported by a key backend, passed through untouched
    #[error("{context}: backend error: {message}")]
    Backend {
        context: &'static str,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for key pair operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for a [`Error::Backend`] failure
    pub fn backend(context: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::SecretUnavailable { .. } => Self::SecretUnavailable { context },
            Self::UnsupportedEncoding {
                curve,
                marker,
                offset,
                diagnostic,
                ..
            } => Self::UnsupportedEncoding {
                context,
                curve,
                marker,
                offset,
                diagnostic,
            },
            Self::LengthMismatch {
                field,
                expected,
                actual,
                ..
            } => Self::LengthMismatch {
                context,
                field,
                expected,
                actual,
            },
            Self::Backend { message, .. } => Self::Backend { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// The context label attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::SecretUnavailable { context }
            | Self::UnsupportedEncoding { context, .. }
            | Self::LengthMismatch { context, .. }
            | Self::Backend { context, .. }
            | Self::InvalidParameter { context, .. } => *context,
        }
    }
}

/// Extra detail attached to [`Error::UnsupportedEncoding`]
///
/// Debug builds record the expected and observed marker bytes in hex. In
/// release builds the type has no fields at all, so the observed bytes
/// cannot reach a message, a log line or a `Debug` dump.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EncodingDiagnostic {
    #[cfg(debug_assertions)]
    detail: Option<String>,
}

impl EncodingDiagnostic {
    /// Describe a marker mismatch
    #[cfg(debug_assertions)]
    pub fn marker_mismatch(expected: &[u8], actual: &[u8]) -> Self {
        Self {
            detail: Some(format!(
                "expected {}, found {}",
                hex::encode(expected),
                hex::encode(actual)
            )),
        }
    }

    /// Describe a marker mismatch
    #[cfg(not(debug_assertions))]
    pub fn marker_mismatch(_expected: &[u8], _actual: &[u8]) -> Self {
        Self {}
    }

    /// The recorded detail, only ever present in debug builds
    #[cfg(debug_assertions)]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The recorded detail, only ever present in debug builds
    #[cfg(not(debug_assertions))]
    pub fn detail(&self) -> Option<&str> {
        None
    }
}

impl fmt::Display for EncodingDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, " ({})", detail),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for EncodingDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => f.debug_tuple("EncodingDiagnostic").field(&detail).finish(),
            None => f.write_str("EncodingDiagnostic"),
        }
    }
}
