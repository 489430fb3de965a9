use darkring_types::{Challenge, MessageDigest};
use sha2::{Digest, Sha256};

/// Seam between the challenge-chain logic and the underlying group
/// arithmetic. The default backend approximates curve operations with
/// domain-separated hashes; a real curve backend can implement the same two
/// operations without any change to signing or verification.
pub trait ChallengeBackend {
    /// Commit to a response value under a message digest.
    fn commit(&self, value: &[u8; 32], message_digest: &MessageDigest) -> [u8; 32];

    /// Fold a commitment and the ring public keys from the current position
    /// onward into the next per-step challenge.
    fn fold(
        &self,
        prev: &Challenge,
        commitment: &[u8; 32],
        keys_after: &[[u8; 32]],
        message_digest: &MessageDigest,
    ) -> Challenge;
}

/// Hash-based stand-in for curve scalar/point arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashBackend;

impl ChallengeBackend for HashBackend {
    fn commit(&self, value: &[u8; 32], message_digest: &MessageDigest) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(b"RING_COMMIT_V1");
        hasher.update(value);
        hasher.update(message_digest);

        hasher.finalize().into()
    }

    fn fold(
        &self,
        prev: &Challenge,
        commitment: &[u8; 32],
        keys_after: &[[u8; 32]],
        message_digest: &MessageDigest,
    ) -> Challenge {
        let mut hasher = Sha256::new();
        hasher.update(b"RING_CHAL_V1");
        hasher.update(prev);
        hasher.update(commitment);
        for key in keys_after {
            hasher.update(key);
        }
        hasher.update(message_digest);

        hasher.finalize().into()
    }
}
