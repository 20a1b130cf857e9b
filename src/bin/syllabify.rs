// Prints how lines are segmented and weighed, syllable by syllable.
// Run with: cargo run --bin syllabify -- "धर्मक्षेत्रे कुरुक्षेत्रे"
use chandas_core::core::classifier::classify_pada;
use chandas_core::core::segmenter::segment_lines;
use crossterm::style::Stylize;

const SAMPLE_LINES: [&str; 8] = [
    "न", "नमः", "कमला", "वाक्", "अग्निमीळे पुरोहितं",
    "धर्मक्षेत्रे कुरुक्षेत्रे", "समवेता युयुत्सवः", "किं ॥ १ ॥",
];

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lines: Vec<String> = if args.is_empty() {
        SAMPLE_LINES.iter().map(|s| s.to_string()).collect()
    } else {
        args
    };

    for line in &lines {
        println!("{}", line.as_str().bold());
        let verse = segment_lines([line]);
        let Some(pada) = verse.padas().first() else {
            println!("  (no syllables)");
            continue;
        };
        for (syllable, rule) in pada.syllables().iter().zip(classify_pada(pada)) {
            println!(
                "  {:<8} vowel={} {:?} onset={} trailing={} marked={} cluster={} => {} ({:?})",
                syllable.text(),
                syllable.vowel(),
                syllable.length(),
                syllable.onset(),
                syllable.trailing(),
                syllable.is_marked(),
                syllable.followed_by_cluster(),
                rule.weight(),
                rule
            );
        }
    }
}
