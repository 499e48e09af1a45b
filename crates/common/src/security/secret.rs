//! Secret data types with guaranteed zeroization
//!
//! This module provides the owned buffer that holds a private scalar for the
//! lifetime of a key pair and erases it on demand or on drop.

use core::fmt;
use ecpair_api::{Error, Result, ResultExt};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Owned secret bytes with a one-way destroyed state
///
/// This type provides:
/// - Ownership of the bytes handed to it; no copy is kept elsewhere
/// - Explicit erasure through [`destroy`](Self::destroy), which is idempotent
/// - Reads that fail with [`Error::SecretUnavailable`] once erased
/// - Automatic zeroization on drop
///
/// Erasure goes through `zeroize`, whose volatile writes and compiler fence
/// keep the optimizer from eliding the stores.
///
/// The buffer has no interior mutability: `destroy` needs `&mut self`, so a
/// read can never overlap an erase.
pub struct SensitiveBuffer {
    data: Vec<u8>,
    destroyed: bool,
}

impl SensitiveBuffer {
    /// Take ownership of `data` as secret material
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            destroyed: false,
        }
    }

    /// Copy secret material out of a slice
    ///
    /// The caller remains responsible for wiping its own copy.
    pub fn from_slice(slice: &[u8]) -> Self {
        Self::new(slice.to_vec())
    }

    /// Borrow the live secret bytes
    ///
    /// # Errors
    ///
    /// [`Error::SecretUnavailable`] once the buffer has been destroyed.
    pub fn bytes(&self) -> Result<&[u8]> {
        if self.destroyed {
            return Err(Error::SecretUnavailable {
                context: "SensitiveBuffer::bytes",
            });
        }
        Ok(&self.data)
    }

    /// Whether [`destroy`](Self::destroy) has been called
    pub fn has_been_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Overwrite every byte with zero and mark the buffer destroyed
    ///
    /// Calling this again is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.data.as_mut_slice().zeroize();
        self.destroyed = true;
    }

    /// Make an independent copy of the live bytes
    ///
    /// # Errors
    ///
    /// [`Error::SecretUnavailable`] once the buffer has been destroyed.
    pub fn try_clone(&self) -> Result<Self> {
        let bytes = self.bytes().with_context("SensitiveBuffer::try_clone")?;
        Ok(Self::from_slice(bytes))
    }
}

impl Drop for SensitiveBuffer {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl ZeroizeOnDrop for SensitiveBuffer {}

impl fmt::Debug for SensitiveBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.destroyed {
            write!(f, "SensitiveBuffer(len={}, destroyed)", self.data.len())
        } else {
            write!(f, "SensitiveBuffer(len={}, [REDACTED])", self.data.len())
        }
    }
}
