// File: src/core/transitions.rs
use crate::core::types::Weight;
use serde::{Deserialize, Serialize};

/// Adjacent-pair counts over {L, G}. `counts[from][to]`, with L = 0 and G = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransitionMatrix {
    counts: [[usize; 2]; 2],
}

impl TransitionMatrix {
    /// Counts every transition `weights[i] -> weights[i + 1]`.
    /// O(n); fewer than two weights give an all-zero matrix.
    pub fn from_weights(weights: &[Weight]) -> Self {
        let mut matrix = Self::default();
        for pair in weights.windows(2) {
            matrix.add(pair[0], pair[1]);
        }
        matrix
    }

    fn add(&mut self, from: Weight, to: Weight) {
        self.counts[from.index()][to.index()] += 1;
    }

    pub fn get(&self, from: Weight, to: Weight) -> usize {
        self.counts[from.index()][to.index()]
    }

    /// The plain numeric table handed to heatmap renderers.
    pub fn counts(&self) -> [[usize; 2]; 2] {
        self.counts
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Row-normalized probabilities `P(to | from)`. `None` when `from` never
    /// precedes another syllable.
    pub fn row_probabilities(&self, from: Weight) -> Option<[f64; 2]> {
        let row = self.counts[from.index()];
        let total = row[0] + row[1];
        if total == 0 {
            return None;
        }
        Some([row[0] as f64 / total as f64, row[1] as f64 / total as f64])
    }
}
