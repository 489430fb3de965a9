use darkring_types::{ComplianceProof, RingSignature};

/// Package verified-signature metadata into an append-only audit record.
///
/// The signature must already have passed verification; this function trusts
/// its caller on that point and does not re-verify. The proof carries only
/// ring size, uniqueness tag, message digest, and the caller-supplied
/// timestamp; responses and ring public keys are deliberately left out.
pub fn export_proof(signature: &RingSignature, timestamp: u64) -> ComplianceProof {
    ComplianceProof::new(
        signature.ring_size,
        signature.uniqueness_tag,
        signature.message_digest,
        timestamp,
    )
}
