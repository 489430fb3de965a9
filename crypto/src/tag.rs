use crate::errors::{CryptoError, Result};
use darkring_types::{MessageDigest, UniquenessTag, SECRET_KEY_LEN};
use sha2::{Digest, Sha256};

/// Derive the uniqueness tag for a (secret, message) pair.
///
/// Pure and deterministic: the same inputs always produce the same tag, and
/// the same secret signing two different messages produces two different
/// tags. The tag lets an external ledger detect a secret being used twice on
/// one message without learning the secret or the signer's ring position.
pub fn uniqueness_tag(secret_key: &[u8], message_digest: &MessageDigest) -> Result<UniquenessTag> {
    if secret_key.len() != SECRET_KEY_LEN {
        return Err(CryptoError::InvalidSecretFormat);
    }

    let mut hasher = Sha256::new();
    hasher.update(b"RING_TAG_V1");
    hasher.update(secret_key);
    hasher.update(message_digest);

    Ok(hasher.finalize().into())
}
