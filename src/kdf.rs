//! NIST SP 800-56C concatenation key derivation function (section 4.1).

use digest::core_api::BlockSizeUser;
use digest::Digest;
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::params::HashKind;

/// Derives `kd_len` bytes of key data from the shared secret `z` and the
/// optional shared info `s1`.
pub(crate) fn concat_kdf(
    hash: HashKind,
    z: &[u8],
    s1: &[u8],
    kd_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    match hash {
        HashKind::Sha256 => derive::<Sha256>(z, s1, kd_len),
        HashKind::Sha384 => derive::<Sha384>(z, s1, kd_len),
        HashKind::Sha512 => derive::<Sha512>(z, s1, kd_len),
    }
}

fn derive<D: Digest + BlockSizeUser>(z: &[u8], s1: &[u8], kd_len: usize) -> Result<Zeroizing<Vec<u8>>> {
    // Deployed peers compute the repetition count from the hash block size
    // and run the counter loop inclusively; both have to be preserved for
    // the derived keys to match. The surplus digest is cut off below.
    let reps = ((kd_len + 7) * 8) / (D::block_size() * 8);
    if reps > u32::MAX as usize {
        return Err(Error::KeyDataTooLong);
    }
    if (reps + 1) * <D as Digest>::output_size() < kd_len {
        return Err(Error::KeyDataTooLong);
    }

    let mut counter: u32 = 1;
    let mut k = Zeroizing::new(Vec::with_capacity((reps + 1) * <D as Digest>::output_size()));
    for _ in 0..=reps {
        let mut h = D::new();
        h.update(counter.to_be_bytes());
        h.update(z);
        h.update(s1);
        k.extend_from_slice(&h.finalize());
        counter = counter.wrapping_add(1);
    }
    k.truncate(kd_len);
    Ok(k)
}
