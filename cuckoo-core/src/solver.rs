//! Parallel lock-free cycle search over the implicit Cuckoo graph.
//!
//! Each worker strides over a disjoint slice of the nonce range, growing a
//! shared forest in `cuck` (a predecessor array indexed by node, `0` meaning
//! "no parent yet"). Two nonces mapping into a tree that already share a
//! root close a cycle; anything shorter or longer than `proof_size` is
//! discarded and the forest keeps growing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::thread;

use crate::edge::EdgeOracle;
use crate::error::{CuckooError, Result};
use crate::params::Params;
use crate::proof_extractor::extract;
use crate::siphash::KeyedHasher;
use crate::types::Proof;

/// Search `header`'s graph for cycles of `params.proof_size()`, restricted to
/// the first `easiness` nonces, using `nthreads` workers, stopping once
/// `maxsols` proofs have been collected.
///
/// Returns `Ok(vec![])` if the search exhausts `easiness` without finding a
/// cycle, a normal outcome, not an error.
pub fn solve(
    header: &[u8],
    params: Params,
    easiness: u64,
    maxsols: usize,
    nthreads: usize,
) -> Result<Vec<Proof>> {
    if maxsols == 0 {
        return Err(CuckooError::InvalidParams {
            reason: "maxsols must be at least 1".to_string(),
        });
    }
    if nthreads == 0 {
        return Err(CuckooError::InvalidParams {
            reason: "nthreads must be at least 1".to_string(),
        });
    }
    if easiness == 0 || easiness > params.size() {
        return Err(CuckooError::InvalidParams {
            reason: format!("easiness must be in [1, {}]", params.size()),
        });
    }

    let oracle = EdgeOracle::new(KeyedHasher::new(header)?, params);
    let cuck: Vec<AtomicU32> = (0..=params.size()).map(|_| AtomicU32::new(0)).collect();
    let solutions: Mutex<Vec<Proof>> = Mutex::new(Vec::with_capacity(maxsols));
    let (done_tx, done_rx) = crossbeam_channel::unbounded::<()>();

    thread::scope(|scope| {
        for id in 0..nthreads {
            let tx = done_tx.clone();
            let oracle = &oracle;
            let cuck = &cuck;
            let solutions = &solutions;
            scope.spawn(move || {
                run_worker(id, nthreads, easiness, maxsols, oracle, cuck, solutions);
                let _ = tx.send(());
            });
        }
        drop(done_tx);
        // Single receive on the fanned-in completion channel; every worker
        // is still joined at scope exit.
        let _ = done_rx.recv();
    });

    Ok(solutions.into_inner().unwrap())
}

fn run_worker(
    id: usize,
    nthreads: usize,
    easiness: u64,
    maxsols: usize,
    oracle: &EdgeOracle,
    cuck: &[AtomicU32],
    solutions: &Mutex<Vec<Proof>>,
) {
    let max_path_len = oracle.params().max_path_len();
    let mut us = vec![0u64; max_path_len];
    let mut vs = vec![0u64; max_path_len];

    let mut nonce = id as u64;
    while nonce < easiness {
        let (u0, v0) = oracle.sipedge(nonce);
        let u = cuck[u0 as usize].load(Ordering::Relaxed) as u64;
        let v = cuck[v0 as usize].load(Ordering::Relaxed) as u64;
        if u == v0 || v == u0 {
            // Duplicate edge into the forest; skip without disturbing it.
            nonce += nthreads as u64;
            continue;
        }

        let nu = match path(cuck, u0, &mut us, max_path_len) {
            Some(nu) => nu,
            None => {
                log::warn!("worker {id} aborting: path overflow near nonce {nonce}");
                return;
            }
        };
        let nv = match path(cuck, v0, &mut vs, max_path_len) {
            Some(nv) => nv,
            None => {
                log::warn!("worker {id} aborting: path overflow near nonce {nonce}");
                return;
            }
        };

        if us[nu] == vs[nv] {
            let min = nu.min(nv);
            let mut nu = nu - min;
            let mut nv = nv - min;
            while us[nu] != vs[nv] {
                nu += 1;
                nv += 1;
            }
            let length = nu + nv + 1;
            if length == oracle.params().proof_size() {
                let mut sols = solutions.lock().unwrap();
                if sols.len() < maxsols {
                    if let Some(proof) = extract(oracle, &us, nu, &vs, nv, easiness) {
                        log::debug!("worker {id} recovered a {length}-cycle at nonce {nonce}");
                        sols.push(proof);
                    }
                }
            }
        } else if nu < nv {
            let mut k = nu;
            while k != 0 {
                k -= 1;
                cuck[us[k + 1] as usize].store(us[k] as u32, Ordering::Relaxed);
            }
            cuck[us[0] as usize].store(vs[0] as u32, Ordering::Relaxed);
        } else {
            let mut k = nv;
            while k != 0 {
                k -= 1;
                cuck[vs[k + 1] as usize].store(vs[k] as u32, Ordering::Relaxed);
            }
            cuck[vs[0] as usize].store(us[0] as u32, Ordering::Relaxed);
        }

        nonce += nthreads as u64;
    }
}

/// Walk the forest from `x0` until reaching the sentinel (`0`), recording
/// every node visited into `buf`. Returns the final index reached, or `None`
/// if the walk exceeds `max_len`, an illegally long cycle or a forest gone
/// stale under races from other workers.
fn path(cuck: &[AtomicU32], x0: u64, buf: &mut [u64], max_len: usize) -> Option<usize> {
    buf[0] = x0;
    let mut nu = 0usize;
    let mut x = cuck[x0 as usize].load(Ordering::Relaxed) as u64;
    while x != 0 {
        nu += 1;
        if nu >= max_len {
            return None;
        }
        buf[nu] = x;
        x = cuck[x as usize].load(Ordering::Relaxed) as u64;
    }
    Some(nu)
}
