//! ECIES parameter suites and the per-curve default table.

use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::curve::Curve;

/// Hash function of a parameter suite. Drives the KDF, the MAC, and the
/// tag length on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashKind {
    Sha256,
    Sha384,
    Sha512,
}

impl HashKind {
    /// Digest size in bytes.
    pub fn size(self) -> usize {
        match self {
            HashKind::Sha256 => 32,
            HashKind::Sha384 => 48,
            HashKind::Sha512 => 64,
        }
    }

    /// Internal block size in bytes. The KDF iteration count is derived
    /// from this, not from the digest size.
    pub fn block_size(self) -> usize {
        match self {
            HashKind::Sha256 => 64,
            HashKind::Sha384 => 128,
            HashKind::Sha512 => 128,
        }
    }

    /// One-shot digest of `data`.
    pub(crate) fn digest(self, data: &[u8]) -> Zeroizing<Vec<u8>> {
        match self {
            HashKind::Sha256 => Zeroizing::new(Sha256::digest(data).to_vec()),
            HashKind::Sha384 => Zeroizing::new(Sha384::digest(data).to_vec()),
            HashKind::Sha512 => Zeroizing::new(Sha512::digest(data).to_vec()),
        }
    }
}

/// Block cipher of a parameter suite, always run in CTR mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherKind {
    Aes128,
    Aes192,
    Aes256,
}

impl CipherKind {
    /// Key size in bytes the cipher expects.
    pub fn key_len(self) -> usize {
        match self {
            CipherKind::Aes128 => 16,
            CipherKind::Aes192 => 24,
            CipherKind::Aes256 => 32,
        }
    }
}

/// A complete ECIES parameter suite.
///
/// `block_size` is the cipher block size and therefore the IV length;
/// `key_len` is the symmetric sub-key length the KDF must supply. Both
/// sender and receiver must agree on the suite out of band: the wire
/// frame carries no algorithm identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EciesParams {
    pub hash: HashKind,
    pub cipher: CipherKind,
    pub block_size: usize,
    pub key_len: usize,
}

/// AES-128-CTR with SHA-256, the P-256 default.
pub const ECIES_AES128_SHA256: EciesParams = EciesParams {
    hash: HashKind::Sha256,
    cipher: CipherKind::Aes128,
    block_size: 16,
    key_len: 16,
};

/// AES-192-CTR with SHA-384, the P-384 default.
pub const ECIES_AES192_SHA384: EciesParams = EciesParams {
    hash: HashKind::Sha384,
    cipher: CipherKind::Aes192,
    block_size: 16,
    key_len: 24,
};

/// AES-256-CTR with SHA-512, the P-521 default.
pub const ECIES_AES256_SHA512: EciesParams = EciesParams {
    hash: HashKind::Sha512,
    cipher: CipherKind::Aes256,
    block_size: 16,
    key_len: 32,
};

/// Returns the recommended parameter suite for `curve`, or `None` when the
/// curve has no suite. P-224 has no entry: it sits below the 128-bit
/// security floor and is refused everywhere downstream.
pub fn params_from_curve(curve: Curve) -> Option<EciesParams> {
    match curve {
        Curve::P224 => None,
        Curve::P256 => Some(ECIES_AES128_SHA256),
        Curve::P384 => Some(ECIES_AES192_SHA384),
        Curve::P521 => Some(ECIES_AES256_SHA512),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_suites_match_curve_strength() {
        let p256 = params_from_curve(Curve::P256).unwrap();
        assert_eq!(p256, ECIES_AES128_SHA256);
        assert_eq!(p256.key_len, 16);
        assert_eq!(p256.hash.size(), 32);

        let p384 = params_from_curve(Curve::P384).unwrap();
        assert_eq!(p384, ECIES_AES192_SHA384);
        assert_eq!(p384.key_len, 24);
        assert_eq!(p384.hash.size(), 48);

        let p521 = params_from_curve(Curve::P521).unwrap();
        assert_eq!(p521, ECIES_AES256_SHA512);
        assert_eq!(p521.key_len, 32);
        assert_eq!(p521.hash.size(), 64);
    }

    #[test]
    fn p224_has_no_default_suite() {
        assert!(params_from_curve(Curve::P224).is_none());
    }

    #[test]
    fn iv_length_is_cipher_block_size() {
        for params in [ECIES_AES128_SHA256, ECIES_AES192_SHA384, ECIES_AES256_SHA512] {
            assert_eq!(params.block_size, 16);
            assert_eq!(params.cipher.key_len(), params.key_len);
        }
    }
}
