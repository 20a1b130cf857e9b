use chandas_core::core::pingala::pingala_count;
use chandas_core::export::export_rows;
use chandas_core::{AnalyzerConfig, PadaSplit, ProsodyAnalyzer, Weight, WeightRule};

const GITA_1_1: &str = "धर्मक्षेत्रे कुरुक्षेत्रे\nसमवेता युयुत्सवः ।\nमामकाः पाण्डवाश्चैव\nकिमकुर्वत सञ्जय ॥ १ ॥";

const SAMPLES: [&str; 5] = [
    GITA_1_1,
    "यदा यदा हि धर्मस्य ग्लानिर्भवति भारत ।\nअभ्युत्थानमधर्मस्य तदात्मानं सृजाम्यहम् ॥",
    "न",
    "abc 123 ।",
    "",
];

#[test]
fn counts_always_sum_to_syllable_count() {
    let analyzer = ProsodyAnalyzer::default();
    for text in SAMPLES {
        let result = analyzer.analyze(text);
        let counts = result.counts();
        assert_eq!(counts.laghu + counts.guru, result.syllable_count(), "{text}");
        assert_eq!(result.weights().len(), result.verse().syllable_count());
        assert_eq!(result.rules().len(), result.weights().len());
        assert_eq!(export_rows(&result).len(), result.syllable_count());
    }
}

#[test]
fn every_pada_ends_guru() {
    let analyzer = ProsodyAnalyzer::default();
    for text in SAMPLES {
        for pada in analyzer.analyze(text).pada_weights() {
            assert_eq!(pada.last(), Some(&Weight::Guru), "{text}");
        }
    }
}

#[test]
fn gita_opening_verse() {
    let result = ProsodyAnalyzer::default().analyze(GITA_1_1);
    let padas: Vec<usize> = result.pada_weights().iter().map(Vec::len).collect();
    assert_eq!(padas, vec![8, 8, 8, 8]);
    assert_eq!(result.syllable_count(), 32);
    assert_eq!(result.pingala_count(), pingala_count(32));
    assert_eq!(
        result.lg_string().split(' ').take(8).collect::<Vec<_>>(),
        vec!["G", "G", "G", "G", "L", "G", "G", "G"]
    );
    // Anushtubh: the fifth syllable of every pāda is laghu.
    for pada in result.pada_weights() {
        assert_eq!(pada[4], Weight::Laghu);
    }
    assert_eq!(result.transitions().total(), 31);
}

#[test]
fn unlineated_verse_splits_into_quarters() {
    let one_line = GITA_1_1.replace('\n', " ");
    let config = AnalyzerConfig {
        pada_split: PadaSplit::EqualParts(4),
        ..Default::default()
    };
    let result = ProsodyAnalyzer::new(config).unwrap().analyze(&one_line);
    assert_eq!(result.pada_weights().len(), 1);
    assert_eq!(result.pada_distribution().len(), 4);
    assert!(result.pada_distribution().iter().all(|c| c.total() == 8));
}

#[test]
fn danda_config_splits_half_verses() {
    let text = "यदा यदा हि धर्मस्य । ग्लानिर्भवति भारत ॥";
    let config = AnalyzerConfig {
        danda_splits_pada: true,
        ..Default::default()
    };
    let lines = ProsodyAnalyzer::default().analyze(text);
    let dandas = ProsodyAnalyzer::new(config).unwrap().analyze(text);
    assert_eq!(lines.verse().padas().len(), 1);
    assert_eq!(dandas.verse().padas().len(), 2);
    assert_eq!(lines.syllable_count(), dandas.syllable_count());
}

#[test]
fn non_devanagari_input_is_empty_not_an_error() {
    let result = ProsodyAnalyzer::default().analyze("abc 123 ।");
    assert_eq!(result.syllable_count(), 0);
    assert_eq!(result.entropy(), None);
    assert_eq!(result.heaviness(), None);
}

#[test]
fn rules_explain_weights() {
    let result = ProsodyAnalyzer::default().analyze(GITA_1_1);
    for (syllable, weight, rule) in result.classified() {
        assert_eq!(rule.weight(), weight);
        if rule == WeightRule::PadaFinal {
            assert!(!syllable.is_marked());
            assert!(!syllable.followed_by_cluster());
        }
    }
}

#[test]
fn json_output_carries_the_derived_fields() {
    let result = ProsodyAnalyzer::default().analyze(GITA_1_1);
    let value: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["weights"].as_array().unwrap().len(), 32);
    assert_eq!(value["counts"]["laghu"], result.counts().laghu);
    assert_eq!(value["counts"]["guru"], result.counts().guru);
    assert_eq!(value["verse"]["padas"].as_array().unwrap().len(), 4);
    assert_eq!(value["verse"]["padas"][0]["syllables"][0]["text"], "ध");
    assert_eq!(value["transitions"]["counts"][0][0], result.transitions().get(Weight::Laghu, Weight::Laghu));
    let entropy = value["entropy"].as_f64().unwrap();
    assert!((entropy - result.entropy().unwrap()).abs() < 1e-12);
}
