//! Key pairs, key generation, and ECDH key agreement.

use elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::curve::{self, Curve};
use crate::error::{Error, Result};
use crate::params::{params_from_curve, EciesParams};

/// An elliptic curve public key: a curve identity, a validated affine
/// point, and an optionally bound parameter suite.
///
/// When no suite is bound, operations fall back to the curve default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) curve: Curve,
    /// Uncompressed SEC1 encoding, `0x04 || X || Y`.
    pub(crate) point: Vec<u8>,
    pub(crate) params: Option<EciesParams>,
}

impl PublicKey {
    /// Parses a SEC1-encoded point (compressed or uncompressed) on `curve`.
    /// No parameter suite is bound; the curve default applies until
    /// [`PublicKey::with_params`] binds one.
    pub fn from_sec1_bytes(curve: Curve, bytes: &[u8]) -> Result<Self> {
        let point = curve::parse_point(curve, bytes)?;
        Ok(PublicKey {
            curve,
            point,
            params: None,
        })
    }

    /// Binds a parameter suite. Parameters are fixed at key creation;
    /// there is deliberately no mutating setter.
    pub fn with_params(mut self, params: EciesParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn params(&self) -> Option<EciesParams> {
        self.params
    }

    /// The affine x-coordinate, fixed-width big-endian.
    pub fn x(&self) -> &[u8] {
        &self.point[1..1 + self.curve.byte_len()]
    }

    /// The affine y-coordinate, fixed-width big-endian.
    pub fn y(&self) -> &[u8] {
        &self.point[1 + self.curve.byte_len()..]
    }

    /// Uncompressed SEC1 encoding of the point, as it appears on the wire.
    pub fn as_sec1_bytes(&self) -> &[u8] {
        &self.point
    }

    /// The bound suite, or the curve default.
    pub(crate) fn resolved_params(&self) -> Result<EciesParams> {
        self.params
            .or_else(|| params_from_curve(self.curve))
            .ok_or(Error::UnsupportedParams)
    }
}

/// Capability to take part in decryption: yield a public key and perform
/// ECDH against a peer point.
///
/// [`PrivateKey`] implements this for in-memory keys. Hardware-backed keys
/// that never expose their scalar can implement it with an opaque handle
/// and use [`crate::decrypt`] unchanged.
pub trait KeyProvider {
    /// The public half of the key.
    fn public(&self) -> &PublicKey;

    /// ECDH shared secret with `peer`: the x-coordinate of `d * peer`,
    /// exactly `byte_len` bytes.
    fn generate_shared(&self, peer: &PublicKey) -> Result<Zeroizing<Vec<u8>>>;
}

/// An elliptic curve private key: a public key plus the scalar `d`.
///
/// The scalar is held fixed-width and zeroized on drop.
#[derive(Clone)]
pub struct PrivateKey {
    pub(crate) public: PublicKey,
    pub(crate) d: Zeroizing<Vec<u8>>,
}

impl PrivateKey {
    /// Builds a private key from big-endian scalar bytes, accepting
    /// encodings shorter than the field width (leading zeros stripped).
    /// The public point is derived, so the `d * G` invariant holds by
    /// construction. Out-of-range scalars are rejected.
    pub fn from_scalar_bytes(curve: Curve, d: &[u8]) -> Result<Self> {
        let width = curve.byte_len();
        if d.len() > width {
            return Err(Error::InvalidPrivateKey);
        }
        let mut padded = Zeroizing::new(vec![0u8; width]);
        padded[width - d.len()..].copy_from_slice(d);
        let point = curve::derive_public(curve, &padded)?;
        Ok(PrivateKey {
            public: PublicKey {
                curve,
                point,
                params: None,
            },
            d: padded,
        })
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// The scalar, fixed-width big-endian.
    pub fn scalar_bytes(&self) -> &[u8] {
        &self.d
    }

    /// Decrypts an ECIES ciphertext with this key. Method form of
    /// [`crate::decrypt`] for callers holding a concrete key.
    pub fn decrypt(&self, c: &[u8], s1: Option<&[u8]>, s2: Option<&[u8]>) -> Result<Vec<u8>> {
        crate::ecies::decrypt(self, c, s1, s2)
    }
}

impl KeyProvider for PrivateKey {
    fn public(&self) -> &PublicKey {
        &self.public
    }

    /// SEC 1 section 3.3.1 ECDH key agreement.
    fn generate_shared(&self, peer: &PublicKey) -> Result<Zeroizing<Vec<u8>>> {
        if self.public.curve != peer.curve {
            return Err(Error::InvalidCurve);
        }
        let x = curve::scalar_mult_x(self.public.curve, &self.d, &peer.point)?;
        if x.len() > self.public.curve.byte_len() {
            return Err(Error::SharedKeyTooBig);
        }
        Ok(x)
    }
}

/// Generates a keypair on `curve` and binds `params` (or the curve
/// default) to the public key. Fails with `UnsupportedParams` when
/// `params` is `None` and the curve has no default.
pub fn generate_key<R: CryptoRng + RngCore>(
    rng: &mut R,
    curve: Curve,
    params: Option<EciesParams>,
) -> Result<PrivateKey> {
    let params = match params {
        Some(p) => p,
        None => params_from_curve(curve).ok_or(Error::UnsupportedParams)?,
    };
    let (d, point) = curve::generate_scalar(curve, rng)?;
    Ok(PrivateKey {
        public: PublicKey {
            curve,
            point,
            params: Some(params),
        },
        d,
    })
}

/// Conversions between ECIES keys and the curve-native key types the
/// ECDSA stack consumes. Importing binds the curve's default suite;
/// exporting fails with `InvalidCurve` when the key lives on a different
/// curve.
macro_rules! impl_curve_interop {
    ($variant:ident, $ec:ident) => {
        impl From<&$ec::PublicKey> for PublicKey {
            fn from(key: &$ec::PublicKey) -> Self {
                PublicKey {
                    curve: Curve::$variant,
                    point: key.to_encoded_point(false).as_bytes().to_vec(),
                    params: params_from_curve(Curve::$variant),
                }
            }
        }

        impl TryFrom<&PublicKey> for $ec::PublicKey {
            type Error = Error;

            fn try_from(key: &PublicKey) -> Result<Self> {
                if key.curve != Curve::$variant {
                    return Err(Error::InvalidCurve);
                }
                $ec::PublicKey::from_sec1_bytes(&key.point).map_err(|_| Error::InvalidPublicKey)
            }
        }

        impl From<&$ec::SecretKey> for PrivateKey {
            fn from(key: &$ec::SecretKey) -> Self {
                PrivateKey {
                    public: PublicKey::from(&key.public_key()),
                    d: Zeroizing::new(key.to_bytes().to_vec()),
                }
            }
        }

        impl TryFrom<&PrivateKey> for $ec::SecretKey {
            type Error = Error;

            fn try_from(key: &PrivateKey) -> Result<Self> {
                if key.public.curve != Curve::$variant {
                    return Err(Error::InvalidCurve);
                }
                $ec::SecretKey::from_slice(&key.d).map_err(|_| Error::InvalidPrivateKey)
            }
        }
    };
}

impl_curve_interop!(P256, p256);
impl_curve_interop!(P384, p384);
impl_curve_interop!(P521, p521);
