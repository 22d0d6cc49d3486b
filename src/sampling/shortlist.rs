use serde::{Serialize, Deserialize};

/// One query result: sampled indices plus a parallel per-index weight.
///
/// Every sampler in this crate assigns uniform weight 1.0; the field exists
/// so downstream ranking code can consume (index, weight) pairs from any
/// shortlist source without special-casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortlist {
    pub indices: Vec<usize>,
    pub weights: Vec<f64>,
}

impl Shortlist {
    /// Builds a shortlist with weight 1.0 for every index.
    pub fn uniform(indices: Vec<usize>) -> Shortlist {
        let weights = vec![1.0; indices.len()];
        Shortlist { indices, weights }
    }
}
