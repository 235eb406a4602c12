// Refresh tokens are stored in the blacklist as SHA-256 digests, never
// as the raw token.
use sha2::{Digest, Sha256};

pub fn digest_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
