use chandas_core::core::stats::WeightCounts;
use chandas_core::export::{export_csv_file, write_csv};
use chandas_core::{AnalysisResult, AnalyzerConfig, ChandasError, PadaSplit, ProsodyAnalyzer, Result, Weight};
use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use env_logger::Builder;
use log::LevelFilter;
use std::fs;
use std::io::{self, stdin, stdout, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

/// Laghu/Guru prosody analysis of Sanskrit verse in Devanagari.
#[derive(Parser, Debug)]
#[command(name = "chandas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Verse text, one pāda per line
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Read the verse from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Analyzer configuration (JSON)
    #[arg(short, long, env = "CHANDAS_CONFIG")]
    config: Option<PathBuf>,

    /// Pāda grouping for the distribution table
    #[arg(long, value_enum)]
    split: Option<SplitArg>,

    /// Treat dandas (। ॥) as pāda boundaries
    #[arg(long)]
    danda: bool,

    /// Also write the per-syllable CSV report to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Human,
    Json,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum SplitArg {
    /// One group per input line
    Lines,
    /// Four equal quarters of the whole sequence
    Quarters,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn build_analyzer(args: &Args) -> Result<ProsodyAnalyzer> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };
    match args.split {
        Some(SplitArg::Lines) => config.pada_split = PadaSplit::LineBreaks,
        Some(SplitArg::Quarters) => config.pada_split = PadaSplit::EqualParts(4),
        None => {}
    }
    if args.danda {
        config.danda_splits_pada = true;
    }
    ProsodyAnalyzer::new(config)
}

fn run(args: Args) -> Result<()> {
    let analyzer = build_analyzer(&args)?;

    let text = if let Some(text) = &args.text {
        text.clone()
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)?
    } else if stdin().is_terminal() {
        return interactive(&analyzer, &args);
    } else {
        let mut buf = String::new();
        stdin().read_to_string(&mut buf)?;
        buf
    };

    let result = analyzer.analyze(&text);
    emit(&result, &args)
}

/// Prompt loop: a verse is the lines typed before an empty line.
fn interactive(analyzer: &ProsodyAnalyzer, args: &Args) -> Result<()> {
    println!("Sanskrit Chandas Analyzer. Enter a verse, then an empty line. Type 'exit' to quit.");
    println!("---------------------------------------------------------------");

    let mut verse = Vec::new();
    print_prompt(&verse)?;
    for line in stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "exit" => return Ok(()),
            "" if verse.is_empty() => {}
            "" => {
                let result = analyzer.analyze_lines(&verse);
                emit(&result, args)?;
                verse.clear();
            }
            _ => verse.push(line),
        }
        print_prompt(&verse)?;
    }
    if !verse.is_empty() {
        emit(&analyzer.analyze_lines(&verse), args)?;
    }
    Ok(())
}

fn print_prompt(verse: &[String]) -> io::Result<()> {
    print!("\n[pāda {}]> ", verse.len() + 1);
    stdout().flush()
}

fn emit(result: &AnalysisResult, args: &Args) -> Result<()> {
    match args.format {
        OutputFormat::Human => print_human(result)?,
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
        OutputFormat::Csv => write_csv(result, stdout().lock())?,
    }
    if let Some(path) = &args.export {
        export_csv_file(result, path)?;
    }
    Ok(())
}

fn undefined() -> String {
    "undefined".dark_grey().to_string()
}

fn weight_symbol(weight: Weight) -> String {
    match weight {
        Weight::Laghu => "L".green().to_string(),
        Weight::Guru => "G".red().bold().to_string(),
    }
}

fn print_human(result: &AnalysisResult) -> Result<()> {
    let counts = result.counts();
    let mut out = stdout().lock();

    writeln!(out, "\n{}", "Syllables".bold())?;
    for (i, pada) in result.verse().padas().iter().enumerate() {
        let weights: Vec<String> = result.pada_weights()[i].iter().map(|&w| weight_symbol(w)).collect();
        writeln!(out, "  Pāda {}: {}", i + 1, pada.text())?;
        writeln!(out, "          {}", weights.join(" "))?;
    }

    writeln!(out, "\n{}", "Summary".bold())?;
    writeln!(out, "  LG sequence:     {}", result.lg_string())?;
    writeln!(out, "  Laghu (L):       {}", counts.laghu)?;
    writeln!(out, "  Guru (G):        {}", counts.guru)?;
    writeln!(
        out,
        "  L:G ratio:       {} ({})",
        counts,
        result
            .laghu_per_guru()
            .map(|r| format!("{r:.2}"))
            .unwrap_or_else(undefined)
    )?;
    writeln!(
        out,
        "  Heaviness:       {}",
        result.heaviness().map(|h| h.to_string()).unwrap_or_else(undefined)
    )?;
    writeln!(
        out,
        "  Shannon entropy: {}",
        result.entropy().map(|h| format!("{h:.3} bits")).unwrap_or_else(undefined)
    )?;
    writeln!(
        out,
        "  Pingala count:   {} (n={})",
        result.pingala_count().map(|m| m.to_string()).unwrap_or_else(undefined),
        result.syllable_count()
    )?;

    let m = result.transitions();
    writeln!(out, "\n{}", "Transitions (row: current, column: next)".bold())?;
    writeln!(out, "         L     G")?;
    for from in [Weight::Laghu, Weight::Guru] {
        writeln!(
            out,
            "  {}  {:>5} {:>5}",
            from,
            m.get(from, Weight::Laghu),
            m.get(from, Weight::Guru)
        )?;
    }

    writeln!(out, "\n{}", "Pāda distribution".bold())?;
    for (i, WeightCounts { laghu, guru }) in result.pada_distribution().iter().enumerate() {
        writeln!(out, "  Pāda {}: L={laghu} G={guru}", i + 1)?;
    }
    out.flush().map_err(ChandasError::from)
}
