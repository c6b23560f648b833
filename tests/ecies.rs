//! End-to-end tests of the ECIES pipeline and key serialization.

use ecies::{
    decrypt, encrypt, export_public_pem, generate_key, import_public_pem, marshal_private,
    params_from_curve, unmarshal_private, Curve, Error, KeyProvider, PrivateKey,
};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn p256_frame_has_the_documented_length() {
    // 65-byte point, 16-byte IV, 5-byte body, 32-byte tag.
    let key = generate_key(&mut OsRng, Curve::P256, None).unwrap();
    let ct = encrypt(&mut OsRng, key.public(), b"hello", None, None).unwrap();
    assert_eq!(ct.len(), 65 + 16 + 5 + 32);
    assert_eq!(ct[0], 4);
    assert_eq!(decrypt(&key, &ct, None, None).unwrap(), b"hello");
}

#[test]
fn p384_frame_has_the_documented_length() {
    // 97-byte point, 16-byte IV, 48-byte tag.
    let key = generate_key(&mut OsRng, Curve::P384, None).unwrap();
    let params = params_from_curve(Curve::P384).unwrap();
    assert_eq!(params.hash.size(), 48);
    assert_eq!(params.key_len, 24);

    let ct = encrypt(&mut OsRng, key.public(), b"hello", None, None).unwrap();
    assert_eq!(ct.len(), 97 + 16 + 5 + 48);
    assert_eq!(decrypt(&key, &ct, None, None).unwrap(), b"hello");
}

#[test]
fn p521_roundtrip() {
    let key = generate_key(&mut OsRng, Curve::P521, None).unwrap();
    let ct = encrypt(&mut OsRng, key.public(), b"top of the range", None, None).unwrap();
    assert_eq!(ct.len(), 133 + 16 + 16 + 64);
    assert_eq!(decrypt(&key, &ct, None, None).unwrap(), b"top of the range");
}

#[test]
fn mismatched_kdf_shared_info_is_rejected() {
    let key = generate_key(&mut OsRng, Curve::P256, None).unwrap();
    let ct = encrypt(&mut OsRng, key.public(), b"payload", Some(b"ctx-v1"), None).unwrap();
    assert!(matches!(
        decrypt(&key, &ct, Some(b"ctx-v2"), None),
        Err(Error::InvalidMessage)
    ));
}

#[test]
fn cross_curve_ecdh_is_an_invalid_curve() {
    let p256 = generate_key(&mut OsRng, Curve::P256, None).unwrap();
    let p384 = generate_key(&mut OsRng, Curve::P384, None).unwrap();
    assert!(matches!(
        p256.generate_shared(p384.public()),
        Err(Error::InvalidCurve)
    ));
}

#[test]
fn imported_curve_native_key_handles_a_kibibyte() {
    let native = p256::SecretKey::random(&mut OsRng);
    let key = PrivateKey::from(&native);

    let mut payload = vec![0u8; 1024];
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    rng.fill_bytes(&mut payload);

    let ct = encrypt(&mut OsRng, key.public(), &payload, None, None).unwrap();
    assert_eq!(decrypt(&key, &ct, None, None).unwrap(), payload);
}

#[test]
fn pem_export_import_preserves_the_point() {
    let key = generate_key(&mut OsRng, Curve::P256, None).unwrap();
    let pem = export_public_pem(key.public()).unwrap();
    let restored = import_public_pem(&pem).unwrap();
    assert_eq!(restored.x(), key.public().x());
    assert_eq!(restored.y(), key.public().y());
}

#[test]
fn private_der_preserves_suite_and_decrypts_old_ciphertexts() {
    let key = generate_key(&mut OsRng, Curve::P384, None).unwrap();
    let ct = encrypt(&mut OsRng, key.public(), b"durable", None, None).unwrap();

    let der = marshal_private(&key).unwrap();
    let restored = unmarshal_private(&der).unwrap();
    assert_eq!(restored.public().params(), key.public().params());
    assert_eq!(restored.decrypt(&ct, None, None).unwrap(), b"durable");
}

#[test]
fn deterministic_rng_still_randomizes_per_call() {
    // One seeded stream across two encryptions must still diverge, since
    // each call consumes fresh scalar and IV material from it.
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let key = generate_key(&mut rng, Curve::P256, None).unwrap();
    let a = encrypt(&mut rng, key.public(), b"same input", None, None).unwrap();
    let b = encrypt(&mut rng, key.public(), b"same input", None, None).unwrap();
    assert_ne!(a, b);
    assert_eq!(decrypt(&key, &a, None, None).unwrap(), b"same input");
    assert_eq!(decrypt(&key, &b, None, None).unwrap(), b"same input");
}

#[test]
fn compressed_ephemeral_points_decrypt() {
    // Rewrite the frame's uncompressed point into compressed form; the
    // shorter frame must still verify and decrypt.
    let key = generate_key(&mut OsRng, Curve::P256, None).unwrap();
    let ct = encrypt(&mut OsRng, key.public(), b"squeeze", None, None).unwrap();

    let mut compressed = Vec::with_capacity(ct.len() - 32);
    compressed.push(2 + (ct[64] & 1));
    compressed.extend_from_slice(&ct[1..33]);
    compressed.extend_from_slice(&ct[65..]);
    assert_eq!(decrypt(&key, &compressed, None, None).unwrap(), b"squeeze");
}

#[test]
fn fixed_scalar_keys_reproduce_and_interoperate() {
    let d = hex::decode("0102030405060708091011121314151617181920212223242526272829303132")
        .unwrap();
    let a = PrivateKey::from_scalar_bytes(Curve::P256, &d).unwrap();
    let b = PrivateKey::from_scalar_bytes(Curve::P256, &d).unwrap();
    assert_eq!(a.public().as_sec1_bytes(), b.public().as_sec1_bytes());

    let ct = encrypt(&mut OsRng, a.public(), b"pinned", None, None).unwrap();
    assert_eq!(b.decrypt(&ct, None, None).unwrap(), b"pinned");
}

#[test]
fn p224_never_resolves_parameters() {
    assert!(params_from_curve(Curve::P224).is_none());
    assert!(matches!(
        generate_key(&mut OsRng, Curve::P224, None),
        Err(Error::UnsupportedParams)
    ));
}
