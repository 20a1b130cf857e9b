// File: src/core/classifier.rs
use crate::core::types::{Pada, Syllable, VowelLength, WeightRule};

/// Picks the first matching weight rule for a syllable.
///
/// Priority: long vowel, anusvara/visarga mark, following conjunct,
/// pāda-final position. Anything else is laghu.
pub fn classify(syllable: &Syllable, is_pada_final: bool) -> WeightRule {
    if syllable.length() == VowelLength::Long {
        WeightRule::LongVowel
    } else if syllable.is_marked() {
        WeightRule::Marked
    } else if syllable.followed_by_cluster() {
        WeightRule::Conjunct
    } else if is_pada_final {
        WeightRule::PadaFinal
    } else {
        WeightRule::Short
    }
}

/// Classifies every syllable of a pāda, one rule per syllable.
pub fn classify_pada(pada: &Pada) -> Vec<WeightRule> {
    let last = pada.len().saturating_sub(1);
    pada.syllables()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let rule = classify(s, i == last);
            log::trace!("{} -> {:?}", s.text(), rule);
            rule
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segmenter::segment_line;
    use crate::core::types::Weight;

    fn rules(line: &str) -> Vec<WeightRule> {
        classify_pada(&Pada::new(segment_line(line)))
    }

    #[test]
    fn test_single_short_syllable_is_guru_by_position() {
        assert_eq!(rules("न"), vec![WeightRule::PadaFinal]);
    }

    #[test]
    fn test_rule_priority() {
        // नमः: a short marked final syllable is decided by the mark, not position.
        assert_eq!(rules("नमः"), vec![WeightRule::Short, WeightRule::Marked]);
        // कान्त: long vowel wins over the following conjunct.
        assert_eq!(rules("कान्त"), vec![WeightRule::LongVowel, WeightRule::PadaFinal]);
        // इन्द्र: short vowel before a conjunct.
        assert_eq!(rules("इन्द्र"), vec![WeightRule::Conjunct, WeightRule::PadaFinal]);
    }

    #[test]
    fn test_long_final_keeps_its_own_rule() {
        assert_eq!(
            rules("कमला"),
            vec![WeightRule::Short, WeightRule::Short, WeightRule::LongVowel]
        );
    }

    #[test]
    fn test_dharmakshetre_is_all_guru() {
        let weights: Vec<Weight> = rules("धर्मक्षेत्रे").into_iter().map(WeightRule::weight).collect();
        assert_eq!(weights, vec![Weight::Guru; 4]);
    }

    #[test]
    fn test_empty_pada() {
        assert!(rules("").is_empty());
    }
}
