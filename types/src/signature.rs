use crate::member::{Challenge, MessageDigest, UniquenessTag};
use serde::{Deserialize, Serialize};

/// A linkable ring signature over one message digest.
///
/// `responses` and `ring_public_keys` are positional: verification walks them
/// in order, so any serialization must preserve field order. The signer's
/// index is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RingSignature {
    pub ring_size: u32,
    pub message_digest: MessageDigest,
    pub initial_challenge: Challenge,
    pub responses: Vec<[u8; 32]>,
    pub uniqueness_tag: UniquenessTag,
    pub ring_public_keys: Vec<[u8; 32]>,
}

impl RingSignature {
    pub fn ring_size(&self) -> usize {
        self.ring_size as usize
    }

    /// True when the stored ring size agrees with both positional columns.
    pub fn shape_consistent(&self) -> bool {
        self.responses.len() == self.ring_size() && self.ring_public_keys.len() == self.ring_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_signature_shape() {
        let sig = RingSignature {
            ring_size: 3,
            message_digest: [1u8; 32],
            initial_challenge: [2u8; 32],
            responses: vec![[3u8; 32], [4u8; 32], [5u8; 32]],
            uniqueness_tag: [6u8; 32],
            ring_public_keys: vec![[7u8; 32], [8u8; 32], [9u8; 32]],
        };

        assert_eq!(sig.ring_size(), 3);
        assert!(sig.shape_consistent());
    }

    #[test]
    fn test_ring_signature_shape_mismatch() {
        let sig = RingSignature {
            ring_size: 3,
            message_digest: [1u8; 32],
            initial_challenge: [2u8; 32],
            responses: vec![[3u8; 32], [4u8; 32]],
            uniqueness_tag: [6u8; 32],
            ring_public_keys: vec![[7u8; 32], [8u8; 32], [9u8; 32]],
        };

        assert!(!sig.shape_consistent());
    }
}
