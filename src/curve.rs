//! Curve identities and the dispatch layer over the per-curve arithmetic.
//!
//! Keys carry a [`Curve`] value at runtime; this module maps each identity
//! onto the matching arithmetic crate. Points cross this boundary as SEC1
//! byte strings and scalars as fixed-width big-endian byte strings, so the
//! rest of the crate never names a concrete curve type.

use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use elliptic_curve::{Group, PrimeField};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Identity of a NIST prime curve.
///
/// P-224 exists only so the serialization layer can name it when parsing;
/// every arithmetic path refuses it.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Curve {
    P224,
    P256,
    P384,
    P521,
}

impl Curve {
    /// Order of the base field in bits.
    pub fn bit_size(self) -> usize {
        match self {
            Curve::P224 => 224,
            Curve::P256 => 256,
            Curve::P384 => 384,
            Curve::P521 => 521,
        }
    }

    /// Width of a field element (and of a scalar) in bytes.
    pub fn byte_len(self) -> usize {
        (self.bit_size() + 7) / 8
    }
}

/// Expands `$body` once per supported curve with `$ec` aliased to the
/// arithmetic crate. P-224 short-circuits with `UnsupportedParams`.
macro_rules! dispatch {
    ($curve:expr, $ec:ident => $body:block) => {
        match $curve {
            Curve::P256 => {
                use p256 as $ec;
                $body
            }
            Curve::P384 => {
                use p384 as $ec;
                $body
            }
            Curve::P521 => {
                use p521 as $ec;
                $body
            }
            Curve::P224 => Err(Error::UnsupportedParams),
        }
    };
}

/// Draws a uniformly random scalar in `[1, n-1]` and returns it together
/// with the uncompressed SEC1 encoding of `d * G`.
pub(crate) fn generate_scalar<R: CryptoRng + RngCore>(
    curve: Curve,
    rng: &mut R,
) -> Result<(Zeroizing<Vec<u8>>, Vec<u8>)> {
    dispatch!(curve, ec => {
        let scalar = ec::NonZeroScalar::random(rng);
        let point = (ec::ProjectivePoint::generator() * scalar.as_ref()).to_affine();
        let d = Zeroizing::new(scalar.to_repr().to_vec());
        Ok((d, point.to_encoded_point(false).as_bytes().to_vec()))
    })
}

/// Recomputes `d * G` for a fixed-width scalar. Rejects scalars outside
/// `[1, n-1]` with `InvalidPrivateKey`.
pub(crate) fn derive_public(curve: Curve, d: &[u8]) -> Result<Vec<u8>> {
    if d.len() != curve.byte_len() {
        return Err(Error::InvalidPrivateKey);
    }
    dispatch!(curve, ec => {
        let repr = ec::FieldBytes::clone_from_slice(d);
        let scalar = Option::<ec::NonZeroScalar>::from(ec::NonZeroScalar::from_repr(repr))
            .ok_or(Error::InvalidPrivateKey)?;
        let point = (ec::ProjectivePoint::generator() * scalar.as_ref()).to_affine();
        Ok(point.to_encoded_point(false).as_bytes().to_vec())
    })
}

/// Validates a SEC1-encoded point (compressed or uncompressed) and returns
/// its uncompressed encoding. Structurally bad input is `InvalidPublicKey`;
/// a well-formed encoding that names no point on the curve is
/// `InvalidCurve`.
pub(crate) fn parse_point(curve: Curve, bytes: &[u8]) -> Result<Vec<u8>> {
    dispatch!(curve, ec => {
        let encoded = ec::EncodedPoint::from_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
        if encoded.is_identity() {
            return Err(Error::InvalidPublicKey);
        }
        let affine = Option::<ec::AffinePoint>::from(ec::AffinePoint::from_encoded_point(&encoded))
            .ok_or(Error::InvalidCurve)?;
        Ok(affine.to_encoded_point(false).as_bytes().to_vec())
    })
}

/// ECDH core: computes `d * P` and returns the x-coordinate, left-padded
/// to exactly [`Curve::byte_len`] bytes. The fixed width matters: the KDF
/// and MAC need a deterministic length, independent of leading zeros.
pub(crate) fn scalar_mult_x(curve: Curve, d: &[u8], point: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    if d.len() != curve.byte_len() {
        return Err(Error::InvalidPrivateKey);
    }
    dispatch!(curve, ec => {
        let repr = ec::FieldBytes::clone_from_slice(d);
        let scalar = Option::<ec::NonZeroScalar>::from(ec::NonZeroScalar::from_repr(repr))
            .ok_or(Error::InvalidPrivateKey)?;
        let encoded = ec::EncodedPoint::from_bytes(point).map_err(|_| Error::InvalidPublicKey)?;
        let affine = Option::<ec::AffinePoint>::from(ec::AffinePoint::from_encoded_point(&encoded))
            .ok_or(Error::InvalidCurve)?;
        let shared = (ec::ProjectivePoint::from(affine) * scalar.as_ref()).to_affine();
        let shared = shared.to_encoded_point(false);
        let x = shared.x().ok_or(Error::SharedKeyIsPointAtInfinity)?;
        Ok(Zeroizing::new(x.to_vec()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn scalar_and_point_widths() {
        for (curve, scalar_len, point_len) in [
            (Curve::P256, 32, 65),
            (Curve::P384, 48, 97),
            (Curve::P521, 66, 133),
        ] {
            let (d, point) = generate_scalar(curve, &mut OsRng).unwrap();
            assert_eq!(d.len(), scalar_len);
            assert_eq!(point.len(), point_len);
            assert_eq!(point[0], 4);
        }
    }

    #[test]
    fn p224_is_refused() {
        assert!(matches!(
            generate_scalar(Curve::P224, &mut OsRng),
            Err(Error::UnsupportedParams)
        ));
        assert!(matches!(
            parse_point(Curve::P224, &[4u8; 57]),
            Err(Error::UnsupportedParams)
        ));
    }

    #[test]
    fn derive_public_matches_generation() {
        let (d, point) = generate_scalar(Curve::P256, &mut OsRng).unwrap();
        assert_eq!(derive_public(Curve::P256, &d).unwrap(), point);
    }

    #[test]
    fn derive_public_rejects_zero_scalar() {
        let zero = vec![0u8; 32];
        assert!(matches!(
            derive_public(Curve::P256, &zero),
            Err(Error::InvalidPrivateKey)
        ));
    }

    #[test]
    fn parse_point_roundtrips_compressed_form() {
        let (_, point) = generate_scalar(Curve::P256, &mut OsRng).unwrap();
        // Rebuild the compressed encoding by hand: parity tag plus x.
        let mut compressed = Vec::with_capacity(33);
        compressed.push(2 + (point[64] & 1));
        compressed.extend_from_slice(&point[1..33]);
        assert_eq!(parse_point(Curve::P256, &compressed).unwrap(), point);
    }

    #[test]
    fn parse_point_rejects_bad_encodings() {
        assert!(matches!(
            parse_point(Curve::P256, &[]),
            Err(Error::InvalidPublicKey)
        ));
        assert!(matches!(
            parse_point(Curve::P256, &[7u8; 65]),
            Err(Error::InvalidPublicKey)
        ));
        // Valid structure, but (1, 1) is not on P-256.
        let mut off_curve = vec![0u8; 65];
        off_curve[0] = 4;
        off_curve[32] = 1;
        off_curve[64] = 1;
        assert!(matches!(
            parse_point(Curve::P256, &off_curve),
            Err(Error::InvalidCurve)
        ));
    }

    #[test]
    fn shared_x_is_fixed_width() {
        for curve in [Curve::P256, Curve::P384, Curve::P521] {
            let (da, _) = generate_scalar(curve, &mut OsRng).unwrap();
            let (_, pb) = generate_scalar(curve, &mut OsRng).unwrap();
            let x = scalar_mult_x(curve, &da, &pb).unwrap();
            assert_eq!(x.len(), curve.byte_len());
        }
    }
}
