use crate::config::AnalyzerConfig;
use crate::core::classifier::classify_pada;
use crate::core::pingala::{pingala_count, pingala_series};
use crate::core::segmenter::{segment_lines, segment_verse, split_pada_lines};
use crate::core::stats::{group_padas, lg_string, Heaviness, WeightCounts};
use crate::core::transitions::TransitionMatrix;
use crate::core::types::{Syllable, Verse, Weight, WeightRule};
use crate::error::Result;
use serde::Serialize;

/// Everything derived from one verse. Rebuilt from scratch for every input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    verse: Verse,
    /// One rule per syllable, in verse order.
    rules: Vec<WeightRule>,
    weights: Vec<Weight>,
    counts: WeightCounts,
    laghu_per_guru: Option<f64>,
    guru_fraction: Option<f64>,
    heaviness: Option<Heaviness>,
    entropy: Option<f64>,
    transitions: TransitionMatrix,
    pada_weights: Vec<Vec<Weight>>,
    pada_distribution: Vec<WeightCounts>,
    pingala_count: Option<u128>,
}

impl AnalysisResult {
    pub fn verse(&self) -> &Verse {
        &self.verse
    }

    pub fn rules(&self) -> &[WeightRule] {
        &self.rules
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// Syllables paired with their weight and deciding rule, in verse order.
    pub fn classified(&self) -> impl Iterator<Item = (&Syllable, Weight, WeightRule)> {
        self.verse
            .syllables()
            .zip(self.rules.iter())
            .map(|(s, &rule)| (s, rule.weight(), rule))
    }

    pub fn syllable_count(&self) -> usize {
        self.weights.len()
    }

    pub fn counts(&self) -> WeightCounts {
        self.counts
    }

    pub fn laghu_per_guru(&self) -> Option<f64> {
        self.laghu_per_guru
    }

    pub fn guru_fraction(&self) -> Option<f64> {
        self.guru_fraction
    }

    pub fn heaviness(&self) -> Option<Heaviness> {
        self.heaviness
    }

    pub fn entropy(&self) -> Option<f64> {
        self.entropy
    }

    pub fn transitions(&self) -> &TransitionMatrix {
        &self.transitions
    }

    /// Weights grouped by input line.
    pub fn pada_weights(&self) -> &[Vec<Weight>] {
        &self.pada_weights
    }

    /// L/G counts per group, grouped by the configured split mode.
    pub fn pada_distribution(&self) -> &[WeightCounts] {
        &self.pada_distribution
    }

    pub fn pingala_count(&self) -> Option<u128> {
        self.pingala_count
    }

    pub fn pingala_series(&self) -> Vec<(usize, u128)> {
        pingala_series(self.syllable_count())
    }

    pub fn lg_string(&self) -> String {
        lg_string(&self.weights)
    }
}

/// Runs segment → classify → aggregate. Holds only configuration, so one
/// analyzer can serve any number of independent runs.
#[derive(Debug, Clone, Default)]
pub struct ProsodyAnalyzer {
    config: AnalyzerConfig,
}

impl ProsodyAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes raw verse text, one pāda per line.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_verse(segment_verse(text, self.config.danda_splits_pada))
    }

    /// Analyzes lines that are already split into pādas. Dandas inside a
    /// line still split it when the config asks for it.
    pub fn analyze_lines<I, S>(&self, lines: I) -> AnalysisResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        let danda = self.config.danda_splits_pada;
        self.analyze_verse(segment_lines(
            lines.iter().flat_map(|line| split_pada_lines(line.as_ref(), danda)),
        ))
    }

    pub fn analyze_verse(&self, verse: Verse) -> AnalysisResult {
        let pada_rules: Vec<Vec<WeightRule>> = verse.padas().iter().map(classify_pada).collect();
        let pada_weights: Vec<Vec<Weight>> = pada_rules
            .iter()
            .map(|rules| rules.iter().map(|r| r.weight()).collect())
            .collect();
        let rules: Vec<WeightRule> = pada_rules.into_iter().flatten().collect();
        let weights: Vec<Weight> = pada_weights.iter().flatten().copied().collect();

        let counts = WeightCounts::from_weights(&weights);
        let pada_distribution = group_padas(&pada_weights, self.config.pada_split)
            .iter()
            .map(|group| WeightCounts::from_weights(group))
            .collect();

        let result = AnalysisResult {
            rules,
            counts,
            laghu_per_guru: counts.laghu_per_guru(),
            guru_fraction: counts.guru_fraction(),
            heaviness: Heaviness::classify(&counts, &self.config.heaviness),
            entropy: counts.entropy(),
            transitions: TransitionMatrix::from_weights(&weights),
            pada_weights,
            pada_distribution,
            pingala_count: pingala_count(weights.len()),
            weights,
            verse,
        };
        log::debug!(
            "Analyzed {} syllables ({}), entropy {:?}",
            result.syllable_count(),
            result.counts,
            result.entropy
        );
        result
    }
}
