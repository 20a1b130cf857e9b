// File: src/export.rs
//! Table projection of an analysis, for spreadsheet export.
use crate::core::engine::AnalysisResult;
use crate::core::types::{Weight, WeightRule};
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// One syllable as an export row. Indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub pada: usize,
    pub syllable: usize,
    pub text: String,
    pub weight: Weight,
    pub rule: WeightRule,
}

/// Rows in verse order, one per syllable.
pub fn export_rows(result: &AnalysisResult) -> Vec<ExportRow> {
    result
        .verse()
        .padas()
        .iter()
        .enumerate()
        .flat_map(|(p, pada)| pada.syllables().iter().map(move |s| (p, s)))
        .zip(result.rules())
        .map(|((p, s), &rule)| ExportRow {
            pada: p + 1,
            syllable: s.pada_position() + 1,
            text: s.text().to_string(),
            weight: rule.weight(),
            rule,
        })
        .collect()
}

/// Writes the rows as CSV with a header line.
pub fn write_csv<W: Write>(result: &AnalysisResult, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["pada", "syllable", "text", "weight", "rule"])?;
    for row in export_rows(result) {
        csv_writer.write_record([
            row.pada.to_string(),
            row.syllable.to_string(),
            row.text,
            row.weight.to_string(),
            format!("{:?}", row.rule),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the CSV report to `path` atomically: the file either keeps its old
/// contents or holds the complete new report.
pub fn export_csv_file(result: &AnalysisResult, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let writer = BufWriter::new(&temp_file);
        write_csv(result, writer)?;
    }
    temp_file.persist(path)?;
    log::info!("Exported {} rows to {}", result.syllable_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::ProsodyAnalyzer;

    #[test]
    fn test_rows_follow_verse_order() {
        let result = ProsodyAnalyzer::default().analyze("कमला\nनमः");
        let rows = export_rows(&result);
        let keys: Vec<(usize, usize, &str, Weight)> = rows
            .iter()
            .map(|r| (r.pada, r.syllable, r.text.as_str(), r.weight))
            .collect();
        assert_eq!(
            keys,
            vec![
                (1, 1, "क", Weight::Laghu),
                (1, 2, "म", Weight::Laghu),
                (1, 3, "ला", Weight::Guru),
                (2, 1, "न", Weight::Laghu),
                (2, 2, "मः", Weight::Guru),
            ]
        );
        assert_eq!(rows[4].rule, WeightRule::Marked);
    }

    #[test]
    fn test_csv_output() {
        let result = ProsodyAnalyzer::default().analyze("न");
        let mut out = Vec::new();
        write_csv(&result, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "pada,syllable,text,weight,rule\n1,1,न,G,PadaFinal\n");
    }

    #[test]
    fn test_empty_csv_has_header_only() {
        let result = ProsodyAnalyzer::default().analyze("");
        let mut out = Vec::new();
        write_csv(&result, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "pada,syllable,text,weight,rule\n");
    }

    #[test]
    fn test_export_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("verse.csv");
        let result = ProsodyAnalyzer::default().analyze("कमला");
        export_csv_file(&result, &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 4);
    }
}
