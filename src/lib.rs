//! Elliptic Curve Integrated Encryption Scheme (ECIES).
//!
//! Hybrid public-key encryption as specified in SEC 1 section 5.1:
//! an ephemeral ECDH key agreement over a NIST P-curve, the SP 800-56C
//! concatenation KDF, AES-CTR for the payload, and an HMAC tag binding
//! ciphertext and optional shared info.
//!
//! The ciphertext carries no algorithm identifier; sender and receiver
//! must agree on the parameter suite out of band (the per-curve defaults
//! in [`params_from_curve`] are the usual choice).
//!
//! ```no_run
//! use rand::rngs::OsRng;
//!
//! let key = ecies::generate_key(&mut OsRng, ecies::Curve::P256, None)?;
//! let ct = ecies::encrypt(&mut OsRng, key.public(), b"hello", None, None)?;
//! let pt = ecies::decrypt(&key, &ct, None, None)?;
//! assert_eq!(pt, b"hello");
//! # Ok::<(), ecies::Error>(())
//! ```

pub mod asn1;
pub mod curve;
pub mod ecies;
pub mod error;
pub mod key;
pub mod params;

mod kdf;
mod mac;
mod symmetric;

pub use asn1::{
    export_private_pem, export_public_pem, import_private_pem, import_public_pem, marshal_private,
    marshal_public, unmarshal_private, unmarshal_public,
};
pub use curve::Curve;
pub use ecies::{decrypt, encrypt};
pub use error::{Error, Result};
pub use key::{generate_key, KeyProvider, PrivateKey, PublicKey};
pub use params::{
    params_from_curve, CipherKind, EciesParams, HashKind, ECIES_AES128_SHA256,
    ECIES_AES192_SHA384, ECIES_AES256_SHA512,
};
