//! Constants for the fixed PKCS#8 layout of elliptic-curve private keys
//!
//! Platform-native engines export a NIST private key as a PKCS#8
//! `PrivateKeyInfo` wrapping an RFC 5915 `ECPrivateKey` that always carries
//! the public point and never repeats the curve parameters. Because every
//! length in that structure is fixed per curve, the record reduces to:
//!
//! ```text
//! PREFIX ++ d ++ MIDDLE ++ x ++ y
//! ```
//!
//! The prefix ends with the OCTET STRING header of `d`; the middle is the
//! `[1]` tag, the BIT STRING header, the unused-bits byte and the `0x04`
//! uncompressed point marker.

/// Byte length of one P-256 field element in the layout
pub const P256_NUMBER_LENGTH: usize = 32;

/// P-256 bytes preceding the private scalar
pub const P256_PRIVATE_KEY_PREFIX: [u8; 36] = [
    0x30, 0x81, 0x87, // PrivateKeyInfo
    0x02, 0x01, 0x00, // version 0
    0x30, 0x13, // AlgorithmIdentifier
    0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, // id-ecPublicKey
    0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, // prime256v1
    0x04, 0x6d, // privateKey OCTET STRING
    0x30, 0x6b, // ECPrivateKey
    0x02, 0x01, 0x01, // version 1
    0x04, 0x20, // d
];

/// P-256 bytes between the private scalar and the public coordinates
pub const P256_PRIVATE_KEY_MIDDLE: [u8; 6] = [0xa1, 0x44, 0x03, 0x42, 0x00, 0x04];

/// Byte length of one P-384 field element in the layout
pub const P384_NUMBER_LENGTH: usize = 48;

/// P-384 bytes preceding the private scalar
pub const P384_PRIVATE_KEY_PREFIX: [u8; 35] = [
    0x30, 0x81, 0xb6, // PrivateKeyInfo
    0x02, 0x01, 0x00, // version 0
    0x30, 0x10, // AlgorithmIdentifier
    0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, // id-ecPublicKey
    0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x22, // secp384r1
    0x04, 0x81, 0x9e, // privateKey OCTET STRING
    0x30, 0x81, 0x9b, // ECPrivateKey
    0x02, 0x01, 0x01, // version 1
    0x04, 0x30, // d
];

/// P-384 bytes between the private scalar and the public coordinates
pub const P384_PRIVATE_KEY_MIDDLE: [u8; 6] = [0xa1, 0x64, 0x03, 0x62, 0x00, 0x04];

/// Byte length of one P-521 field element in the layout
///
/// 521 bits fit in 66 bytes with 7 bits to spare, so the top byte of every
/// element is either 0x00 or 0x01.
pub const P521_NUMBER_LENGTH: usize = 66;

/// P-521 bytes preceding the private scalar
pub const P521_PRIVATE_KEY_PREFIX: [u8; 35] = [
    0x30, 0x81, 0xee, // PrivateKeyInfo
    0x02, 0x01, 0x00, // version 0
    0x30, 0x10, // AlgorithmIdentifier
    0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, // id-ecPublicKey
    0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x23, // secp521r1
    0x04, 0x81, 0xd6, // privateKey OCTET STRING
    0x30, 0x81, 0xd3, // ECPrivateKey
    0x02, 0x01, 0x01, // version 1
    0x04, 0x42, // d
];

/// P-521 bytes between the private scalar and the public coordinates
pub const P521_PRIVATE_KEY_MIDDLE: [u8; 8] = [0xa1, 0x81, 0x89, 0x03, 0x81, 0x86, 0x00, 0x04];

/// Tag of an uncompressed SEC1 point
pub const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;
