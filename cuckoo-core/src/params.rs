//! Sizing knobs for the Cuckoo Cycle graph and search.

use crate::error::{CuckooError, Result};

/// Default `size_shift`: log2 of the total node count (2^20 nodes).
pub const DEFAULT_SIZE_SHIFT: u32 = 20;

/// Default cycle length to search for.
pub const DEFAULT_PROOF_SIZE: usize = 42;

/// Default cap on path depth during a single worker's traversal.
pub const DEFAULT_MAX_PATH_LEN: usize = 4096;

const MIN_SIZE_SHIFT: u32 = 4;
// Node indices are stored as `u32` in the solver's shared predecessor array
// (see `solver.rs`); capping `size_shift` here keeps every node index that
// the rest of the crate produces representable in 32 bits.
const MAX_SIZE_SHIFT: u32 = 32;
const MIN_PROOF_SIZE: usize = 4;

/// Graph size and cycle length configuration.
///
/// `size_shift` is the primary knob; `proof_size` and `max_path_len` default
/// to the standard values and rarely need overriding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    size_shift: u32,
    proof_size: usize,
    max_path_len: usize,
}

impl Params {
    /// Build params with a custom `size_shift`, keeping the other defaults.
    pub fn new(size_shift: u32) -> Result<Self> {
        Self::with_all(size_shift, DEFAULT_PROOF_SIZE, DEFAULT_MAX_PATH_LEN)
    }

    /// Build params overriding every field.
    pub fn with_all(size_shift: u32, proof_size: usize, max_path_len: usize) -> Result<Self> {
        if !(MIN_SIZE_SHIFT..=MAX_SIZE_SHIFT).contains(&size_shift) {
            return Err(CuckooError::InvalidParams {
                reason: format!(
                    "size_shift {size_shift} out of range [{MIN_SIZE_SHIFT}, {MAX_SIZE_SHIFT}]"
                ),
            });
        }
        if proof_size < MIN_PROOF_SIZE || proof_size % 2 != 0 {
            return Err(CuckooError::InvalidParams {
                reason: format!("proof_size {proof_size} must be even and >= {MIN_PROOF_SIZE}"),
            });
        }
        if max_path_len == 0 {
            return Err(CuckooError::InvalidParams {
                reason: "max_path_len must be non-zero".to_string(),
            });
        }
        Ok(Self {
            size_shift,
            proof_size,
            max_path_len,
        })
    }

    /// Log2 of the total node count.
    pub fn size_shift(&self) -> u32 {
        self.size_shift
    }

    /// Required cycle length.
    pub fn proof_size(&self) -> usize {
        self.proof_size
    }

    /// Cap on path depth during a worker's traversal.
    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    /// Total node count, `2^size_shift`.
    pub fn size(&self) -> u64 {
        1u64 << self.size_shift
    }

    /// Size of each bipartite partition, `size / 2`.
    pub fn half_size(&self) -> u64 {
        self.size() / 2
    }

    /// Mask selecting a node index within a partition.
    pub fn node_mask(&self) -> u64 {
        self.half_size() - 1
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            size_shift: DEFAULT_SIZE_SHIFT,
            proof_size: DEFAULT_PROOF_SIZE,
            max_path_len: DEFAULT_MAX_PATH_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let p = Params::default();
        assert_eq!(p.size_shift(), 20);
        assert_eq!(p.proof_size(), 42);
        assert_eq!(p.max_path_len(), 4096);
        assert_eq!(p.size(), 1 << 20);
        assert_eq!(p.half_size(), 1 << 19);
        assert_eq!(p.node_mask(), (1 << 19) - 1);
    }

    #[test]
    fn rejects_out_of_range_size_shift() {
        assert!(Params::new(0).is_err());
        assert!(Params::new(3).is_err());
        assert!(Params::new(64).is_err());
        assert!(Params::new(10).is_ok());
    }

    #[test]
    fn rejects_odd_or_tiny_proof_size() {
        assert!(Params::with_all(10, 41, 4096).is_err());
        assert!(Params::with_all(10, 2, 4096).is_err());
        assert!(Params::with_all(10, 8, 4096).is_ok());
    }

    #[test]
    fn rejects_zero_max_path_len() {
        assert!(Params::with_all(10, 42, 0).is_err());
    }
}
