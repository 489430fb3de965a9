use crate::errors::{CryptoError, Result};
use crate::keys::address_from_public_key;
use darkring_types::{Address, PublicKeyBytes, RingMember, PUBLIC_KEY_LEN};
use rand::Rng;
use rand_core::{CryptoRng, RngCore};

/// External registry of previously-observed public identities. The builder
/// asks for one unused candidate key per decoy slot and never fabricates
/// decoys itself.
pub trait DecoySource {
    fn next_decoy(&mut self) -> Option<PublicKeyBytes>;
}

impl<F> DecoySource for F
where
    F: FnMut() -> Option<PublicKeyBytes>,
{
    fn next_decoy(&mut self) -> Option<PublicKeyBytes> {
        self()
    }
}

/// Build a fresh anonymity set around the real signer.
///
/// Returns the ring (length `decoy_count + 1`) and the signer's index within
/// it. The signer's position is drawn uniformly from the supplied rng and the
/// ordering is stable for the lifetime of the signing operation that uses it.
/// Rings are sampled fresh on every call; decoys are never reused by
/// reference.
pub fn build_ring<R, S>(
    rng: &mut R,
    decoys: &mut S,
    identity: Address,
    public_key: &[u8],
    decoy_count: usize,
) -> Result<(Vec<RingMember>, usize)>
where
    R: RngCore + CryptoRng,
    S: DecoySource,
{
    if decoy_count < 1 {
        return Err(CryptoError::InvalidRingSize);
    }

    if public_key.len() != PUBLIC_KEY_LEN {
        return Err(CryptoError::InvalidPublicKey);
    }
    let mut real_key = [0u8; PUBLIC_KEY_LEN];
    real_key.copy_from_slice(public_key);

    let mut decoy_keys = Vec::with_capacity(decoy_count);
    for _ in 0..decoy_count {
        let key = decoys
            .next_decoy()
            .ok_or(CryptoError::DecoySourceUnavailable)?;
        decoy_keys.push(key);
    }

    let signer_index = rng.gen_range(0..=decoy_count);

    let mut ring = Vec::with_capacity(decoy_count + 1);
    let mut decoy_iter = decoy_keys.into_iter();

    for ordinal in 0..decoy_count + 1 {
        let member = if ordinal == signer_index {
            RingMember::new(identity, real_key, ordinal as u32)
        } else {
            // Builder invariant: exactly decoy_count keys were drawn above.
            let key = decoy_iter.next().expect("decoy key for every slot");
            RingMember::new(address_from_public_key(&key), key, ordinal as u32)
        };
        ring.push(member);
    }

    Ok((ring, signer_index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{derive_public_key, random_secret};
    use crate::utils::random_bytes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn random_decoy_source() -> impl FnMut() -> Option<PublicKeyBytes> {
        || Some(random_bytes::<32>())
    }

    #[test]
    fn test_build_ring_basic() {
        let mut rng = StdRng::seed_from_u64(21);
        let secret = random_secret(&mut rng);
        let public_key = derive_public_key(&secret).unwrap();
        let identity = address_from_public_key(&public_key);

        let (ring, signer_index) = build_ring(
            &mut rng,
            &mut random_decoy_source(),
            identity,
            &public_key,
            4,
        )
        .unwrap();

        assert_eq!(ring.len(), 5);
        assert!(signer_index < ring.len());
        assert_eq!(ring[signer_index].public_key, public_key);
        assert_eq!(ring[signer_index].identity, identity);
    }

    #[test]
    fn test_build_ring_assigns_ordinals_in_order() {
        let mut rng = StdRng::seed_from_u64(22);
        let public_key = [9u8; 32];

        let (ring, _) = build_ring(
            &mut rng,
            &mut random_decoy_source(),
            [0u8; 20],
            &public_key,
            3,
        )
        .unwrap();

        for (i, member) in ring.iter().enumerate() {
            assert_eq!(member.ordinal, i as u32);
        }
    }

    #[test]
    fn test_build_ring_rejects_zero_decoys() {
        let mut rng = StdRng::seed_from_u64(23);

        let result = build_ring(
            &mut rng,
            &mut random_decoy_source(),
            [0u8; 20],
            &[1u8; 32],
            0,
        );

        assert_eq!(result.unwrap_err(), CryptoError::InvalidRingSize);
    }

    #[test]
    fn test_build_ring_rejects_malformed_public_key() {
        let mut rng = StdRng::seed_from_u64(24);

        let result = build_ring(
            &mut rng,
            &mut random_decoy_source(),
            [0u8; 20],
            &[1u8; 16],
            3,
        );

        assert_eq!(result.unwrap_err(), CryptoError::InvalidPublicKey);
    }

    #[test]
    fn test_build_ring_decoy_source_unavailable() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut remaining = 2;
        let mut flaky = move || {
            if remaining == 0 {
                None
            } else {
                remaining -= 1;
                Some([7u8; 32])
            }
        };

        let result = build_ring(&mut rng, &mut flaky, [0u8; 20], &[1u8; 32], 4);

        assert_eq!(result.unwrap_err(), CryptoError::DecoySourceUnavailable);
    }

    #[test]
    fn test_build_ring_samples_fresh_decoys() {
        let mut rng = StdRng::seed_from_u64(26);
        let public_key = [9u8; 32];

        let (ring1, _) = build_ring(
            &mut rng,
            &mut random_decoy_source(),
            [0u8; 20],
            &public_key,
            4,
        )
        .unwrap();
        let (ring2, _) = build_ring(
            &mut rng,
            &mut random_decoy_source(),
            [0u8; 20],
            &public_key,
            4,
        )
        .unwrap();

        let keys1: Vec<_> = ring1.iter().map(|m| m.public_key).collect();
        let keys2: Vec<_> = ring2.iter().map(|m| m.public_key).collect();
        assert_ne!(keys1, keys2);
    }

    #[test]
    fn test_decoy_identity_derived_from_key() {
        let mut rng = StdRng::seed_from_u64(27);
        let public_key = [9u8; 32];

        let (ring, signer_index) = build_ring(
            &mut rng,
            &mut random_decoy_source(),
            [0x42u8; 20],
            &public_key,
            4,
        )
        .unwrap();

        for (i, member) in ring.iter().enumerate() {
            if i != signer_index {
                assert_eq!(member.identity, address_from_public_key(&member.public_key));
            }
        }
    }
}
