pub mod issue_refresh;
pub mod purge_expired;
pub mod revoke_refresh;
pub mod rotate_refresh;

use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Opaque refresh-token cleartext: 32 random bytes, base64url without
/// padding. Only its digest is stored.
pub(crate) fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

pub(crate) fn hash_token(cleartext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(cleartext.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
