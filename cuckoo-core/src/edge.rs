//! Mapping nonces to edges in the implicit bipartite Cuckoo graph.

use crate::params::Params;
use crate::siphash::KeyedHasher;

/// Generates edges of the Cuckoo graph from nonces, for a fixed header and
/// [`Params`]. Deterministic and pure: the same `(header, params, nonce)`
/// always yields the same edge.
#[derive(Debug, Clone, Copy)]
pub struct EdgeOracle {
    hasher: KeyedHasher,
    params: Params,
}

impl EdgeOracle {
    /// Build an oracle from an already-keyed hasher.
    pub fn new(hasher: KeyedHasher, params: Params) -> Self {
        Self { hasher, params }
    }

    /// The params this oracle generates edges for.
    pub fn params(&self) -> Params {
        self.params
    }

    /// `sipnode(nonce, uorv) = hash(2*nonce + uorv) & node_mask`.
    #[inline]
    pub fn sipnode(&self, nonce: u64, uorv: u64) -> u64 {
        self.hasher.hash(2 * nonce + uorv) & self.params.node_mask()
    }

    /// The U-side node (`uorv == 0`) for a nonce, in `[0, half_size)`.
    #[inline]
    pub fn u_node(&self, nonce: u64) -> u64 {
        self.sipnode(nonce, 0)
    }

    /// The V-side node (`uorv == 1`) for a nonce, offset into `[half_size, size)`.
    #[inline]
    pub fn v_node(&self, nonce: u64) -> u64 {
        self.params.half_size() + self.sipnode(nonce, 1)
    }

    /// `sipedge(nonce) = (u_node(nonce), v_node(nonce))`.
    #[inline]
    pub fn sipedge(&self, nonce: u64) -> (u64, u64) {
        (self.u_node(nonce), self.v_node(nonce))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_depends_only_on_header_and_nonce() {
        let params = Params::default();
        let oracle_a = EdgeOracle::new(KeyedHasher::from_keys(1, 2), params);
        let oracle_b = EdgeOracle::new(KeyedHasher::from_keys(1, 2), params);
        assert_eq!(oracle_a.sipedge(7), oracle_b.sipedge(7));
    }

    #[test]
    fn u_node_within_partition() {
        let params = Params::new(12).unwrap();
        let oracle = EdgeOracle::new(KeyedHasher::from_keys(9, 7), params);
        for n in 0..64 {
            let u = oracle.u_node(n);
            assert!(u < params.half_size());
        }
    }

    #[test]
    fn v_node_offset_into_second_partition() {
        let params = Params::new(12).unwrap();
        let oracle = EdgeOracle::new(KeyedHasher::from_keys(9, 7), params);
        for n in 0..64 {
            let v = oracle.v_node(n);
            assert!(v >= params.half_size());
            assert!(v < params.size());
        }
    }
}
