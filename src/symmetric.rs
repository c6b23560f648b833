//! AES-CTR with a random IV prepended to the ciphertext body.
//!
//! CTR carries no authentication; the pipeline's HMAC tag covers the whole
//! `IV || body` blob.

use aes::cipher::{KeyIvInit, StreamCipher};
use aes::{Aes128, Aes192, Aes256};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::params::{CipherKind, EciesParams};

type Aes128Ctr = ctr::Ctr128BE<Aes128>;
type Aes192Ctr = ctr::Ctr128BE<Aes192>;
type Aes256Ctr = ctr::Ctr128BE<Aes256>;

fn apply_ctr(cipher: CipherKind, key: &[u8], iv: &[u8], buf: &mut [u8]) -> Result<()> {
    match cipher {
        CipherKind::Aes128 => Aes128Ctr::new_from_slices(key, iv)
            .map_err(|_| Error::UnsupportedParams)?
            .apply_keystream(buf),
        CipherKind::Aes192 => Aes192Ctr::new_from_slices(key, iv)
            .map_err(|_| Error::UnsupportedParams)?
            .apply_keystream(buf),
        CipherKind::Aes256 => Aes256Ctr::new_from_slices(key, iv)
            .map_err(|_| Error::UnsupportedParams)?
            .apply_keystream(buf),
    }
    Ok(())
}

/// Encrypts `m` under `key`: draws a fresh `block_size`-byte IV from `rng`
/// and returns `IV || CTR(key, IV, m)`.
pub(crate) fn sym_encrypt<R: CryptoRng + RngCore>(
    rng: &mut R,
    params: &EciesParams,
    key: &[u8],
    m: &[u8],
) -> Result<Vec<u8>> {
    let mut ct = vec![0u8; params.block_size + m.len()];
    let (iv, body) = ct.split_at_mut(params.block_size);
    rng.try_fill_bytes(iv)?;
    body.copy_from_slice(m);
    apply_ctr(params.cipher, key, iv, body)?;
    Ok(ct)
}

/// Decrypts an `IV || body` blob produced by [`sym_encrypt`].
pub(crate) fn sym_decrypt(params: &EciesParams, key: &[u8], ct: &[u8]) -> Result<Vec<u8>> {
    if ct.len() < params.block_size {
        return Err(Error::InvalidMessage);
    }
    let (iv, body) = ct.split_at(params.block_size);
    let mut m = body.to_vec();
    apply_ctr(params.cipher, key, iv, &mut m)?;
    Ok(m)
}
