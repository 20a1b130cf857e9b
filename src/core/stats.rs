// File: src/core/stats.rs
//! Pure statistics over a weight sequence. Anything undefined for the input
//! (empty verse, no guru syllables) is `None`, never a sentinel number.

use crate::config::{HeavinessThresholds, PadaSplit};
use crate::core::types::Weight;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeightCounts {
    pub laghu: usize,
    pub guru: usize,
}

impl WeightCounts {
    pub fn from_weights(weights: &[Weight]) -> Self {
        let guru = weights.iter().filter(|&&w| w == Weight::Guru).count();
        Self {
            laghu: weights.len() - guru,
            guru,
        }
    }

    pub fn total(&self) -> usize {
        self.laghu + self.guru
    }

    /// `laghu / guru`, undefined when there is no guru.
    pub fn laghu_per_guru(&self) -> Option<f64> {
        if self.guru == 0 {
            None
        } else {
            Some(self.laghu as f64 / self.guru as f64)
        }
    }

    /// `guru / n`, undefined for an empty sequence.
    pub fn guru_fraction(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            n => Some(self.guru as f64 / n as f64),
        }
    }

    /// Shannon entropy in bits over {L, G}, undefined for an empty sequence.
    pub fn entropy(&self) -> Option<f64> {
        let n = self.total();
        if n == 0 {
            return None;
        }
        let mut h = 0.0;
        for count in [self.laghu, self.guru] {
            if count > 0 {
                let p = count as f64 / n as f64;
                h -= p * p.log2();
            }
        }
        Some(h)
    }
}

/// Displays as `L:G`.
impl fmt::Display for WeightCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.laghu, self.guru)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heaviness {
    Light,
    Balanced,
    Heavy,
}

impl Heaviness {
    /// Thresholds are exclusive at both ends, so the cut points themselves
    /// count as balanced.
    pub fn classify(counts: &WeightCounts, thresholds: &HeavinessThresholds) -> Option<Self> {
        let fraction = counts.guru_fraction()?;
        Some(if fraction < thresholds.light_below {
            Heaviness::Light
        } else if fraction > thresholds.heavy_above {
            Heaviness::Heavy
        } else {
            Heaviness::Balanced
        })
    }
}

impl fmt::Display for Heaviness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Heaviness::Light => "Light",
            Heaviness::Balanced => "Balanced",
            Heaviness::Heavy => "Heavy",
        };
        f.write_str(label)
    }
}

/// Groups the flat weight sequence according to `split`.
///
/// `LineBreaks` keeps the given pāda groups. `EqualParts(k)` cuts the flat
/// sequence into `k` chunks of `max(1, n / k)` weights; a remainder past the
/// last chunk is dropped and trailing chunks may be empty.
pub fn group_padas(pada_weights: &[Vec<Weight>], split: PadaSplit) -> Vec<Vec<Weight>> {
    match split {
        PadaSplit::LineBreaks => pada_weights.to_vec(),
        PadaSplit::EqualParts(parts) => {
            let flat: Vec<Weight> = pada_weights.iter().flatten().copied().collect();
            let size = (flat.len() / parts.max(1)).max(1);
            (0..parts)
                .map(|i| {
                    let start = i.saturating_mul(size).min(flat.len());
                    let end = (i + 1).saturating_mul(size).min(flat.len());
                    flat[start..end].to_vec()
                })
                .collect()
        }
    }
}

/// Renders weights as space-separated `L`/`G` symbols.
pub fn lg_string(weights: &[Weight]) -> String {
    weights
        .iter()
        .map(|w| w.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
