//! Self-contained O(L^2) verification of a candidate cycle.

use crate::edge::EdgeOracle;
use crate::params::Params;
use crate::siphash::KeyedHasher;
use crate::types::Proof;

/// Verify that `proof`'s nonces, all less than `easiness`, trace out a simple
/// cycle of length `params.proof_size()` in the bipartite graph keyed by
/// `header`.
///
/// Never panics and never returns an error: a malformed proof is simply not
/// a proof, so every rejection path returns `false`.
pub fn verify(header: &[u8], proof: &Proof, params: Params, easiness: u64) -> bool {
    let hasher = match KeyedHasher::new(header) {
        Ok(h) => h,
        Err(_) => return false,
    };
    verify_with_oracle(&EdgeOracle::new(hasher, params), proof, easiness)
}

fn verify_with_oracle(oracle: &EdgeOracle, proof: &Proof, easiness: u64) -> bool {
    let nonces = proof.nonces();
    let proof_size = oracle.params().proof_size();
    if nonces.len() != proof_size {
        return false;
    }

    let mut us = vec![0u64; proof_size];
    let mut vs = vec![0u64; proof_size];
    for (n, &nonce) in nonces.iter().enumerate() {
        if nonce >= easiness || (n != 0 && nonce <= nonces[n - 1]) {
            return false;
        }
        us[n] = oracle.u_node(nonce);
        vs[n] = oracle.v_node(nonce);
    }

    let mut i = 0usize;
    let mut remaining = proof_size;
    loop {
        // find the unique other j with vs[j] == vs[i]
        let mut j = i;
        for k in 0..proof_size {
            if k != i && vs[k] == vs[i] {
                if j != i {
                    return false;
                }
                j = k;
            }
        }
        if j == i {
            return false;
        }
        i = j;

        // find the unique other i with us[i] == us[j]
        let mut next = j;
        for k in 0..proof_size {
            if k != j && us[k] == us[j] {
                if next != j {
                    return false;
                }
                next = k;
            }
        }
        if next == j {
            return false;
        }
        i = next;

        remaining -= 2;
        if i == 0 {
            break;
        }
    }

    remaining == 0
}
