use crate::errors::{CryptoError, Result};
use crate::utils::{hash_sha256, keccak_256};
use darkring_types::{Address, MessageDigest, PublicKeyBytes, ADDRESS_LEN, SECRET_KEY_LEN};
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};

/// Draw a fresh fixed-length secret key from the supplied generator.
pub fn random_secret<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; SECRET_KEY_LEN] {
    let mut secret = [0u8; SECRET_KEY_LEN];
    rng.fill_bytes(&mut secret);
    secret
}

/// Derive the public key for a secret. Hash-based stand-in for
/// scalar-times-basepoint, at the same approximation level as the rest of
/// the engine.
pub fn derive_public_key(secret_key: &[u8]) -> Result<PublicKeyBytes> {
    if secret_key.len() != SECRET_KEY_LEN {
        return Err(CryptoError::InvalidSecretFormat);
    }

    let mut hasher = Sha256::new();
    hasher.update(b"RING_PUBKEY_V1");
    hasher.update(secret_key);

    Ok(hasher.finalize().into())
}

/// Address-like identity handle for a ring member: the low 20 bytes of the
/// Keccak-256 of its public key.
pub fn address_from_public_key(public_key: &PublicKeyBytes) -> Address {
    let hash = keccak_256(public_key);

    let mut address = [0u8; ADDRESS_LEN];
    address.copy_from_slice(&hash[32 - ADDRESS_LEN..]);
    address
}

/// One-way digest of an arbitrary message, computed once per signing or
/// verification call.
pub fn message_digest(message: &[u8]) -> MessageDigest {
    hash_sha256(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_derive_public_key_deterministic() {
        let mut rng = StdRng::seed_from_u64(11);
        let secret = random_secret(&mut rng);

        let pk1 = derive_public_key(&secret).unwrap();
        let pk2 = derive_public_key(&secret).unwrap();

        assert_eq!(pk1, pk2);
    }

    #[test]
    fn test_derive_public_key_distinct_secrets() {
        let mut rng = StdRng::seed_from_u64(12);
        let s1 = random_secret(&mut rng);
        let s2 = random_secret(&mut rng);

        assert_ne!(
            derive_public_key(&s1).unwrap(),
            derive_public_key(&s2).unwrap()
        );
    }

    #[test]
    fn test_derive_public_key_rejects_bad_length() {
        let short = [1u8; 16];

        assert_eq!(
            derive_public_key(&short),
            Err(CryptoError::InvalidSecretFormat)
        );
    }

    #[test]
    fn test_address_from_public_key() {
        let pk = [0x37u8; 32];

        let addr1 = address_from_public_key(&pk);
        let addr2 = address_from_public_key(&pk);

        assert_eq!(addr1, addr2);
        assert_eq!(addr1.len(), ADDRESS_LEN);
    }

    #[test]
    fn test_message_digest() {
        let d1 = message_digest(b"buy 100 units of asset 7");
        let d2 = message_digest(b"buy 100 units of asset 7");
        let d3 = message_digest(b"sell 100 units of asset 7");

        assert_eq!(d1, d2);
        assert_ne!(d1, d3);
    }
}
