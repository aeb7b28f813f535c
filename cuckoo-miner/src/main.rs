//! CLI driver for the Cuckoo Cycle proof-of-work search.
//!
//! Owns everything `cuckoo-core` deliberately leaves out: a header-
//! perturbation loop that hunts for a solvable header, and the JSON +
//! base64 wire format for an accepted proof.

use std::time::Instant;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use cuckoo_core::{solve, verify, Params, Proof};
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Bytes of true randomness seeding the header; the remainder is perturbed
/// byte-by-byte.
const RAND_OFFSET: usize = 64;
/// Upper bound on header length while perturbing.
const MAX_HEADER_LEN: usize = 1024;

#[derive(Parser, Debug)]
#[command(name = "cuckoo-miner", about = "Search for a Cuckoo Cycle proof-of-work solution")]
struct Args {
    /// Number of worker threads per search attempt.
    #[arg(short = 't', long, default_value_t = 4)]
    threads: usize,

    /// Maximum number of solutions to collect per attempt.
    #[arg(short = 'm', long, default_value_t = 8)]
    maxsols: usize,

    /// Fraction of the graph's nonce range to search, as a percentage.
    #[arg(short = 'e', long = "easiness-pct", default_value_t = 50.0)]
    easiness_pct: f64,

    /// log2 of the total node count.
    #[arg(short = 's', long, default_value_t = 20)]
    size_shift: u32,
}

#[derive(Serialize)]
struct ProofDocument {
    easiness: u64,
    header_sha256: String,
    cycle: Vec<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let params = Params::new(args.size_shift)?;
    let easiness = ((args.easiness_pct * params.size() as f64) / 100.0) as u64;
    log::info!(
        "searching for a {}-cycle on a 2^{} graph, {:.1}% easiness, {} threads",
        params.proof_size(),
        args.size_shift,
        args.easiness_pct,
        args.threads
    );

    let mut header = vec![0u8; RAND_OFFSET];
    rand::thread_rng().fill(&mut header[..]);

    let start = Instant::now();
    let mut found: Option<(Vec<u8>, Proof)> = None;
    'search: for _ in 0..(MAX_HEADER_LEN - RAND_OFFSET) {
        header.push(0);
        let last = header.len() - 1;
        for byte in 0u8..=255 {
            header[last] = byte;
            let sols = solve(&header, params, easiness, args.maxsols, args.threads)?;
            if let Some(proof) = sols.into_iter().next() {
                found = Some((header.clone(), proof));
                break 'search;
            }
        }
    }
    let elapsed = start.elapsed();

    match found {
        Some((header, proof)) => {
            debug_assert!(verify(&header, &proof, params, easiness));
            log::info!("solution found in {:.3}s", elapsed.as_secs_f64());
            let doc = ProofDocument {
                easiness,
                header_sha256: hex::encode(Sha256::digest(&header)),
                cycle: proof.nonces().to_vec(),
            };
            let json = serde_json::to_vec(&doc)?;
            println!("{}", STANDARD.encode(json));
        }
        None => {
            log::info!("no solution found in {:.3}s", elapsed.as_secs_f64());
            println!("No solution found.");
        }
    }

    Ok(())
}
