//! Message tag computation, SEC 1 section 3.5.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::params::HashKind;

macro_rules! hmac_tag {
    ($d:ty, $km:expr, $msg:expr, $s2:expr) => {{
        let mut mac =
            Hmac::<$d>::new_from_slice($km).expect("HMAC accepts keys of any length");
        mac.update($msg);
        mac.update($s2);
        mac.finalize().into_bytes().to_vec()
    }};
}

/// Computes `HMAC_hash(km, msg || s2)`. The tag is full digest length.
pub(crate) fn message_tag(hash: HashKind, km: &[u8], msg: &[u8], s2: &[u8]) -> Vec<u8> {
    match hash {
        HashKind::Sha256 => hmac_tag!(Sha256, km, msg, s2),
        HashKind::Sha384 => hmac_tag!(Sha384, km, msg, s2),
        HashKind::Sha512 => hmac_tag!(Sha512, km, msg, s2),
    }
}
