use crate::backend::{ChallengeBackend, HashBackend};
use crate::errors::{CryptoError, Result};
use crate::tag::uniqueness_tag;
use crate::utils::to_hex;
use darkring_types::{Challenge, MessageDigest, RingMember, RingSignature};
use rand_core::{CryptoRng, RngCore};

const MIN_RING_SIZE: usize = 2;

// Forward-only walk: step i folds the commitment for responses[i] with the
// public keys of members i.. only, never wrapping around the ring. The
// current member's key leads its own step, so every ring key is covered by
// the walk. Signing stores the closing value as the initial challenge;
// verification re-walks and compares.
fn challenge_chain<B: ChallengeBackend>(
    backend: &B,
    responses: &[[u8; 32]],
    public_keys: &[[u8; 32]],
    message_digest: &MessageDigest,
) -> Challenge {
    let mut challenge = [0u8; 32];

    for (i, response) in responses.iter().enumerate() {
        let commitment = backend.commit(response, message_digest);
        challenge = backend.fold(&challenge, &commitment, &public_keys[i..], message_digest);
    }

    challenge
}

/// Sign a message digest against a ring, using an explicit challenge backend.
///
/// `ring[signer_index].public_key` must correspond to `secret_key`; that
/// correspondence is the caller's precondition and is not checked here.
/// Violating it yields a signature that fails verification, not a crash.
pub fn sign_with<B, R>(
    backend: &B,
    rng: &mut R,
    message_digest: &MessageDigest,
    secret_key: &[u8],
    ring: &[RingMember],
    signer_index: usize,
) -> Result<RingSignature>
where
    B: ChallengeBackend,
    R: RngCore + CryptoRng,
{
    let ring_size = ring.len();
    if ring_size < MIN_RING_SIZE {
        return Err(CryptoError::InvalidRingSize);
    }
    if signer_index >= ring_size {
        return Err(CryptoError::SignerIndexOutOfRange);
    }

    // Validates the secret format before any randomness is drawn.
    let tag = uniqueness_tag(secret_key, message_digest)?;

    let public_keys: Vec<[u8; 32]> = ring.iter().map(|m| m.public_key).collect();

    let mut responses = vec![[0u8; 32]; ring_size];

    // One fresh scalar-equivalent k, stored directly in the signer's slot
    // (plain scheme: k is not blinded with the challenge and secret).
    let mut k = [0u8; 32];
    rng.fill_bytes(&mut k);
    responses[signer_index] = k;

    for i in (0..ring_size).filter(|&j| j != signer_index) {
        rng.fill_bytes(&mut responses[i]);
    }

    let initial_challenge = challenge_chain(backend, &responses, &public_keys, message_digest);

    Ok(RingSignature {
        ring_size: ring_size as u32,
        message_digest: *message_digest,
        initial_challenge,
        responses,
        uniqueness_tag: tag,
        ring_public_keys: public_keys,
    })
}

/// Verify a ring signature against a message digest, using an explicit
/// challenge backend.
///
/// Returns `Ok(false)` for signatures that do not verify; an `Err` is
/// reserved for structurally malformed input.
pub fn verify_with<B: ChallengeBackend>(
    backend: &B,
    signature: &RingSignature,
    message_digest: &MessageDigest,
) -> Result<bool> {
    // Replay guard: a signature presented against a different message is
    // rejected before anything else is looked at.
    if signature.message_digest != *message_digest {
        return Ok(false);
    }

    if signature.ring_size() < MIN_RING_SIZE {
        return Err(CryptoError::MalformedSignature(format!(
            "ring size {} below minimum {}",
            signature.ring_size, MIN_RING_SIZE
        )));
    }
    if !signature.shape_consistent() {
        return Err(CryptoError::MalformedSignature(format!(
            "ring size {} with {} responses and {} public keys",
            signature.ring_size,
            signature.responses.len(),
            signature.ring_public_keys.len()
        )));
    }
    // Format check only; double-use detection belongs to the external tag
    // ledger.
    if signature.uniqueness_tag == [0u8; 32] {
        return Err(CryptoError::MalformedSignature(format!(
            "placeholder uniqueness tag {}",
            to_hex(&signature.uniqueness_tag)
        )));
    }

    let recomputed = challenge_chain(
        backend,
        &signature.responses,
        &signature.ring_public_keys,
        message_digest,
    );

    Ok(recomputed == signature.initial_challenge)
}

/// Sign with the default hash backend.
pub fn sign<R: RngCore + CryptoRng>(
    rng: &mut R,
    message_digest: &MessageDigest,
    secret_key: &[u8],
    ring: &[RingMember],
    signer_index: usize,
) -> Result<RingSignature> {
    sign_with(
        &HashBackend,
        rng,
        message_digest,
        secret_key,
        ring,
        signer_index,
    )
}

/// Verify with the default hash backend.
pub fn verify(signature: &RingSignature, message_digest: &MessageDigest) -> Result<bool> {
    verify_with(&HashBackend, signature, message_digest)
}

pub fn signature_to_bytes(signature: &RingSignature) -> Vec<u8> {
    bincode::serialize(signature).expect("Serialization should not fail")
}

pub fn signature_from_bytes(bytes: &[u8]) -> Result<RingSignature> {
    bincode::deserialize(bytes).map_err(|e| CryptoError::Deserialization(e.to_string()))
}
