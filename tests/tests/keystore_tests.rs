//! Opaque key pairs backed by a keystore

use ecpair_api::{CurveId, Error, KeyPair};
use ecpair_keys::{EcKeyBackend, EcKeyPair, KeyHandle};
use ecpair_tests::keystore::SoftwareKeystore;
use ecpair_tests::vectors::{self, ALL};

#[tokio::test]
async fn exportable_keys_round_trip_through_the_keystore() {
    let keystore = SoftwareKeystore::new();

    for vector in ALL {
        let original = vector.key();
        let opaque = keystore.import(&original, true).unwrap();
        assert!(!opaque.is_materialized());
        assert_eq!(opaque.curve(), vector.curve);

        let extracted = opaque.extract().await.unwrap();
        assert_eq!(extracted, original);
        assert_eq!(&opaque.extract_public_key().await.unwrap(), original.public_key());
    }
    assert_eq!(keystore.requests(), 6);
}

#[tokio::test]
async fn non_exportable_key_reports_backend_error() {
    let keystore = SoftwareKeystore::new();
    let original = ALL[0].key();
    let opaque = keystore.import(&original, false).unwrap();

    assert_eq!(
        opaque.extract().await.unwrap_err(),
        Error::Backend {
            context: "SoftwareKeystore::extract",
            message: "private key is not exportable".to_string(),
        }
    );
    assert_eq!(keystore.requests(), 1);

    // Public material is still served
    assert_eq!(&opaque.extract_public_key().await.unwrap(), original.public_key());
}

#[tokio::test]
async fn unknown_handle_is_a_backend_error() {
    let keystore = SoftwareKeystore::new();
    let err = keystore
        .extract_public_key(&KeyHandle::new("soft/404"), CurveId::P256)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Backend { context: "SoftwareKeystore", .. }));
}

#[tokio::test]
async fn destroyed_key_cannot_be_imported() {
    let keystore = SoftwareKeystore::new();
    let mut key = ALL[1].key();
    key.destroy();

    assert!(matches!(
        keystore.import(&key, true),
        Err(Error::SecretUnavailable { .. })
    ));
}

#[tokio::test]
async fn materialized_and_opaque_are_interchangeable() {
    let keystore = SoftwareKeystore::new();
    let vector = vectors::P521;
    let pairs = vec![
        EcKeyPair::from(vector.key()),
        keystore.import(&vector.key(), true).unwrap(),
    ];

    let mut public_keys = Vec::new();
    for pair in &pairs {
        public_keys.push(pair.extract_public_key().await.unwrap());
    }
    assert_eq!(public_keys[0], public_keys[1]);
}
