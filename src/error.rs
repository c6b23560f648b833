//! Error handling for ECIES operations.

use core::fmt;

/// Error type for ECIES operations.
///
/// Every failure the library can surface is a distinct variant so callers
/// can discriminate without string matching. On decryption, structural
/// failures and tag mismatches both collapse into [`Error::InvalidMessage`].
#[derive(Debug)]
pub enum Error {
    /// Curves of the two keys differ, or a point is not on its curve.
    InvalidCurve,
    /// Malformed or rejected public key.
    InvalidPublicKey,
    /// Malformed, out-of-range, or wrong-version private key.
    InvalidPrivateKey,
    /// No parameter suite is defined for the curve, or the curve is refused.
    UnsupportedParams,
    /// ECDH produced the point at infinity.
    SharedKeyIsPointAtInfinity,
    /// Shared secret exceeds the width the curve can produce.
    SharedKeyTooBig,
    /// The KDF cannot supply the requested amount of key data.
    KeyDataTooLong,
    /// Ciphertext is truncated, malformed, or its tag does not verify.
    InvalidMessage,
    /// PEM framing could not be parsed at all.
    Import,
    /// The caller-provided randomness source failed.
    Rand(rand::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCurve => write!(f, "ecies: invalid elliptic curve"),
            Error::InvalidPublicKey => write!(f, "ecies: invalid public key"),
            Error::InvalidPrivateKey => write!(f, "ecies: invalid private key"),
            Error::UnsupportedParams => write!(f, "ecies: unsupported ECIES parameters"),
            Error::SharedKeyIsPointAtInfinity => {
                write!(f, "ecies: shared key is point at infinity")
            }
            Error::SharedKeyTooBig => write!(f, "ecies: shared key params are too big"),
            Error::KeyDataTooLong => write!(f, "ecies: can't supply requested key data"),
            Error::InvalidMessage => write!(f, "ecies: invalid message"),
            Error::Import => write!(f, "ecies: failed to import key"),
            Error::Rand(e) => write!(f, "ecies: randomness source failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Rand(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::Rand(err)
    }
}

/// Result type for ECIES operations.
pub type Result<T> = core::result::Result<T, Error>;
