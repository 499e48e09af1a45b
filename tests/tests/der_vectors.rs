//! Byte-exact interop with PKCS#8 records exported by a native engine

use ecpair_api::{CurveId, Error, KeyPair};
use ecpair_keys::{layout, EcKeyPairData};
use ecpair_tests::vectors::{self, ALL};

#[test]
fn parse_exported_records() {
    for vector in ALL {
        let key = EcKeyPairData::parse_der(&vector.der_bytes(), vector.curve).unwrap();

        assert_eq!(key.curve(), vector.curve);
        assert_eq!(key.d().unwrap(), vector.d_bytes().as_slice());
        assert_eq!(key.x(), vector.x_bytes().as_slice());
        assert_eq!(key.y(), vector.y_bytes().as_slice());
        assert_eq!(key, vector.key());
    }
}

#[test]
fn reencode_matches_exporter_byte_for_byte() {
    for vector in ALL {
        let der = vector.key().to_der().unwrap();
        assert_eq!(hex::encode(der.as_slice()), vector.der, "{}", vector.curve);
    }
}

#[test]
fn minimal_p521_scalar_encodes_like_the_exporter() {
    let vector = vectors::P521;
    let d = vector.d_bytes();
    assert_eq!(d[0], 0x00);

    let minimal = EcKeyPairData::new(d[1..].to_vec(), vector.x_bytes(), vector.y_bytes(), CurveId::P521);
    let der = minimal.to_der().unwrap();
    assert_eq!(der.as_slice(), vector.der_bytes().as_slice());
}

#[test]
fn record_for_another_curve_is_rejected() {
    for vector in ALL {
        for curve in CurveId::ALL {
            if curve == vector.curve {
                continue;
            }
            let result = EcKeyPairData::parse_der(&vector.der_bytes(), curve);
            assert!(
                matches!(result, Err(Error::UnsupportedEncoding { marker: "prefix", .. })),
                "{} record parsed as {}",
                vector.curve,
                curve
            );
        }
    }
}

#[test]
fn every_prefix_byte_is_checked() {
    let vector = vectors::P384;
    let prefix_len = layout(CurveId::P384).private_key_prefix.len();

    for index in 0..prefix_len {
        let mut der = vector.der_bytes();
        der[index] = der[index].wrapping_add(1);
        let result = EcKeyPairData::parse_der(&der, CurveId::P384);
        assert!(
            matches!(result, Err(Error::UnsupportedEncoding { offset: 0, .. })),
            "flip at {}",
            index
        );
    }
}

#[test]
fn every_middle_byte_is_checked() {
    let vector = vectors::P521;
    let layout = layout(CurveId::P521);

    for index in layout.middle_offset()..layout.x_offset() {
        let mut der = vector.der_bytes();
        der[index] ^= 0x80;
        let result = EcKeyPairData::parse_der(&der, CurveId::P521);
        assert!(
            matches!(result, Err(Error::UnsupportedEncoding { marker: "middle", .. })),
            "flip at {}",
            index
        );
    }
}

#[test]
#[cfg(not(debug_assertions))]
fn release_errors_omit_record_bytes() {
    let mut der = vectors::P256.der_bytes();
    der[3] = 0xff;
    let err = EcKeyPairData::parse_der(&der, CurveId::P256).unwrap_err();
    assert!(!err.to_string().contains("308187ff"));
    assert!(!format!("{:?}", err).contains("308187ff"));
}

#[test]
#[cfg(debug_assertions)]
fn debug_errors_show_marker_bytes() {
    let mut der = vectors::P256.der_bytes();
    der[3] = 0xff;
    let err = EcKeyPairData::parse_der(&der, CurveId::P256).unwrap_err();
    assert!(err.to_string().contains("found 308187ff"));
}

#[tokio::test]
async fn parsed_record_satisfies_capability() {
    let key = EcKeyPairData::parse_der(&vectors::P256.der_bytes(), CurveId::P256).unwrap();
    let public_key = key.extract_public_key().await.unwrap();
    assert_eq!(public_key.x(), vectors::P256.x_bytes().as_slice());
    assert_eq!(KeyPair::curve(&key), CurveId::P256);
}
