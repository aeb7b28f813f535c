//! Recovering the nonce set of a found cycle from two colliding path walks.

use std::collections::HashSet;

use crate::edge::EdgeOracle;
use crate::types::{EdgeRecord, Proof};

/// Given two path buffers that met at a common ancestor (`us[nu] == vs[nv]`),
/// recover the nonces whose edges form the cycle. Returns `None` if the
/// edge-recovery scan does not land on exactly `proof_size` distinct edges,
/// degenerate paths can under-produce, and the candidate is discarded rather
/// than the solutions store being handed a truncated proof.
pub fn extract(
    oracle: &EdgeOracle,
    us: &[u64],
    nu: usize,
    vs: &[u64],
    nv: usize,
    easiness: u64,
) -> Option<Proof> {
    let half_size = oracle.params().half_size();
    let proof_size = oracle.params().proof_size();

    let mut cycle: HashSet<EdgeRecord> = HashSet::with_capacity(proof_size);
    cycle.insert(EdgeRecord::new(us[0], vs[0] - half_size));

    let mut nu = nu;
    while nu != 0 {
        nu -= 1;
        cycle.insert(EdgeRecord::new(us[(nu + 1) & !1], us[nu | 1] - half_size));
    }

    let mut nv = nv;
    while nv != 0 {
        nv -= 1;
        cycle.insert(EdgeRecord::new(vs[nv | 1], vs[(nv + 1) & !1] - half_size));
    }

    let mut nonces = Vec::with_capacity(proof_size);
    for nonce in 0..easiness {
        let (u, v) = oracle.sipedge(nonce);
        let record = EdgeRecord::new(u, v - half_size);
        if cycle.remove(&record) {
            nonces.push(nonce);
            if nonces.len() == proof_size {
                break;
            }
        }
    }

    if nonces.len() == proof_size {
        Some(Proof::from_nonces(nonces))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use crate::siphash::KeyedHasher;

    #[test]
    fn rejects_degenerate_path_pair() {
        let params = Params::new(10).unwrap();
        let oracle = EdgeOracle::new(KeyedHasher::from_keys(1, 2), params);
        // A path pair that meets immediately produces a single edge, far
        // short of proof_size; extraction must reject it, not truncate.
        let us = [5u64];
        let vs = [params.half_size() + 5];
        assert!(extract(&oracle, &us, 0, &vs, 0, 1 << 10).is_none());
    }
}
