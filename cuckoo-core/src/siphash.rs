//! SipHash-2-4 keyed hashing, seeded from SHA-256 of the header.

use sha2::{Digest, Sha256};

use crate::error::{CuckooError, Result};

/// Parse the first two little-endian 64-bit words out of a SHA-256 digest.
///
/// Exposed separately from [`KeyedHasher::new`] so the pinned key-derivation
/// test vector can assert on the pre-XOR words directly.
pub fn derive_keys(header: &[u8]) -> Result<(u64, u64)> {
    if header.is_empty() {
        return Err(CuckooError::EmptyHeader);
    }
    let digest = Sha256::digest(header);
    let k0 = u64::from_le_bytes(digest[0..8].try_into().unwrap());
    let k1 = u64::from_le_bytes(digest[8..16].try_into().unwrap());
    Ok((k0, k1))
}

/// A SipHash-2-4 instance keyed from a header.
///
/// Internal state is the classic four-word SipHash `v` array, initialised
/// once from the header's derived keys and copied fresh for every call to
/// [`KeyedHasher::hash`] so the seed itself is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct KeyedHasher {
    v: [u64; 4],
}

impl KeyedHasher {
    /// Derive a hasher from a header via SHA-256.
    pub fn new(header: &[u8]) -> Result<Self> {
        let (k0, k1) = derive_keys(header)?;
        Ok(Self::from_keys(k0, k1))
    }

    /// Build a hasher directly from a pair of 64-bit keys, bypassing SHA-256.
    /// Used by the pinned SipHash-2-4 test vectors, which specify `v0..v3`
    /// indirectly through `k0`/`k1`.
    pub fn from_keys(k0: u64, k1: u64) -> Self {
        Self {
            v: [
                k0 ^ 0x736f_6d65_7073_6575,
                k1 ^ 0x646f_7261_6e64_6f6d,
                k0 ^ 0x6c79_6765_6e65_7261,
                k1 ^ 0x7465_6462_7974_6573,
            ],
        }
    }

    /// SipHash-2-4 of the single 64-bit block `m`.
    pub fn hash(&self, m: u64) -> u64 {
        let mut v = self.v;

        v[3] ^= m;
        sip_round(&mut v);
        sip_round(&mut v);
        v[0] ^= m;
        v[2] ^= 0xff;
        sip_round(&mut v);
        sip_round(&mut v);
        sip_round(&mut v);
        sip_round(&mut v);

        v[0] ^ v[1] ^ v[2] ^ v[3]
    }
}

fn sip_round(v: &mut [u64; 4]) {
    v[0] = v[0].wrapping_add(v[1]);
    v[2] = v[2].wrapping_add(v[3]);
    v[1] = v[1].rotate_left(13);
    v[3] = v[3].rotate_left(16);
    v[1] ^= v[0];
    v[3] ^= v[2];
    v[0] = v[0].rotate_left(32);
    v[2] = v[2].wrapping_add(v[1]);
    v[0] = v[0].wrapping_add(v[3]);
    v[1] = v[1].rotate_left(17);
    v[3] = v[3].rotate_left(21);
    v[1] ^= v[2];
    v[3] ^= v[0];
    v[2] = v[2].rotate_left(32);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pins SHA-256 key derivation for a concrete one-byte header.
    #[test]
    fn key_derivation_pinned_vector() {
        let (k0, k1) = derive_keys(&[0u8]).unwrap();
        // sha256([0x00]) = 6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01
        assert_eq!(k0, 0x987a_b3ff_9c0b_346e);
        assert_eq!(k1, 0x2c0a_78bb_e644_a59c);
    }

    #[test]
    fn empty_header_rejected() {
        assert!(matches!(derive_keys(&[]), Err(CuckooError::EmptyHeader)));
        assert!(matches!(KeyedHasher::new(&[]), Err(CuckooError::EmptyHeader)));
    }

    /// Reference SipHash-2-4 test vectors for 8-byte inputs with an all-zero key.
    #[test]
    fn siphash_reference_vectors() {
        let hasher = KeyedHasher::from_keys(0, 0);
        assert_eq!(hasher.hash(0), 0x1E92_4B9D_7377_00D7);
        assert_eq!(hasher.hash(1), 0xB325_6052_8ACC_4AD5);
    }

    #[test]
    fn hash_is_deterministic() {
        let hasher = KeyedHasher::new(b"some header bytes").unwrap();
        assert_eq!(hasher.hash(42), hasher.hash(42));
        assert_ne!(hasher.hash(42), hasher.hash(43));
    }
}
