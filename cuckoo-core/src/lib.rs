//! Cuckoo Cycle proof-of-work: core algorithms and data types.
//!
//! This crate provides:
//! - Header-keyed edge generation using SipHash-2-4 ([`siphash`], [`edge`])
//! - A parallel, lock-free cycle search over the implicit bipartite graph
//!   ([`solver`])
//! - A self-contained O(L^2) verifier ([`verifier`]) that does not depend on
//!   the solver's forest at all
//!
//! Proof serialization (JSON, base64 framing) and CLI concerns are out of
//! scope for this crate; they live in the `cuckoo-miner` binary.

pub mod edge;
pub mod error;
pub mod params;
pub mod proof_extractor;
pub mod siphash;
pub mod solver;
pub mod types;
pub mod verifier;

pub use edge::EdgeOracle;
pub use error::{CuckooError, Result};
pub use params::Params;
pub use siphash::KeyedHasher;
pub use solver::solve;
pub use types::Proof;
pub use verifier::verify;
