//! Shared data types: proofs and the edge record used during extraction.

use std::fmt;

/// An accepted cycle: an ascending sequence of nonces whose edges form a
/// simple cycle of the configured length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof(Vec<u64>);

impl Proof {
    /// Wrap a nonce sequence as a proof without checking ascending order or
    /// length; callers inside this crate only ever build a `Proof` from
    /// already-validated nonce lists.
    pub(crate) fn from_nonces(nonces: Vec<u64>) -> Self {
        Self(nonces)
    }

    /// The nonces making up this proof, in ascending order.
    pub fn nonces(&self) -> &[u64] {
        &self.0
    }

    /// Number of nonces (equals the configured `proof_size`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A proof is never constructed empty; this only exists for clippy parity.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}")?;
        }
        write!(f, "]")
    }
}

impl From<Proof> for Vec<u64> {
    fn from(proof: Proof) -> Self {
        proof.0
    }
}

/// An edge recorded during proof extraction, in `(u, v_raw)` form where
/// `v_raw = v - half_size`, the V-side stored in its partition-local form
/// so it compares equal to `EdgeOracle::sipnode(n, 1)` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    pub u: u64,
    pub v_raw: u64,
}

impl EdgeRecord {
    pub fn new(u: u64, v_raw: u64) -> Self {
        Self { u, v_raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_display_formats_nonces() {
        let proof = Proof::from_nonces(vec![1, 2, 3]);
        assert_eq!(proof.to_string(), "[1, 2, 3]");
        assert_eq!(proof.len(), 3);
    }

    #[test]
    fn edge_record_equality_is_structural() {
        assert_eq!(EdgeRecord::new(1, 2), EdgeRecord::new(1, 2));
        assert_ne!(EdgeRecord::new(1, 2), EdgeRecord::new(2, 1));
    }
}
