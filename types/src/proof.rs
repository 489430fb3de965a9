use crate::member::{MessageDigest, UniquenessTag};
use serde::{Deserialize, Serialize};

/// Reduced-disclosure audit record derived from a verified ring signature.
///
/// Deliberately carries neither the response column nor the ring public keys,
/// so the exported record cannot be used to re-derive or impersonate the
/// original ring. Write-once: a newer proof for a later message supersedes,
/// never edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComplianceProof {
    pub ring_size: u32,
    pub uniqueness_tag: UniquenessTag,
    pub message_digest: MessageDigest,
    pub timestamp: u64,
}

impl ComplianceProof {
    pub fn new(
        ring_size: u32,
        uniqueness_tag: UniquenessTag,
        message_digest: MessageDigest,
        timestamp: u64,
    ) -> Self {
        Self {
            ring_size,
            uniqueness_tag,
            message_digest,
            timestamp,
        }
    }
}
