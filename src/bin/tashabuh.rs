use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, error, LevelFilter};
use serde::Serialize;
use tashabuh::{
    Comparison,
    Error,
    ParallelMatcher,
    PlagiarismDetector,
    Result,
    TashabuhConfig,
    config::subsystems::OutputFormat,
    utils::pairs::{load_pairs, write_outcomes},
};

/// Estimate textual overlap between Arabic documents
#[derive(Parser, Debug)]
#[command(name = "tashabuh", version)]
struct Args {
    /// First document
    #[arg(required_unless_present = "pairs")]
    first: Option<PathBuf>,

    /// Second document
    #[arg(required_unless_present = "pairs")]
    second: Option<PathBuf>,

    /// Shingle window size (0 uses the default of 3)
    #[arg(short = 'n', long)]
    ngram_size: Option<usize>,

    /// INI configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// CSV file of `first,second` pairs to compare in batch
    #[arg(long, conflicts_with_all = ["first", "second"])]
    pairs: Option<PathBuf>,

    /// Where to write batch results (stdout when omitted)
    #[arg(short, long, requires = "pairs")]
    output: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Append logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    first: &'a Path,
    second: &'a Path,
    similarity: f64,
    band: &'static str,
    interpretation: &'static str,
    details: &'a Comparison,
}

fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::file_access(path, e))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn load_config(args: &Args) -> Result<TashabuhConfig> {
    let mut config = match &args.config {
        Some(path) => TashabuhConfig::from_ini(path)?,
        None => TashabuhConfig::default(),
    };

    if let Some(size) = args.ngram_size.filter(|&size| size > 0) {
        config.generator.ngram_size = size;
    }
    if args.json {
        config.report.format = OutputFormat::Json;
    }
    if let Some(level) = &args.log_level {
        config.processor.log_level = level.trim().to_lowercase();
    }

    config.validate()?;
    Ok(config)
}

fn print_report(config: &TashabuhConfig, first: &Path, second: &Path, comparison: &Comparison) -> Result<()> {
    let band = comparison.band();
    match config.report.format {
        OutputFormat::Json => {
            let report = JsonReport {
                first,
                second,
                similarity: comparison.percentage(),
                band: band.label(),
                interpretation: band.interpretation(),
                details: comparison,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        },
        OutputFormat::Text => {
            println!("\nPlagiarism Detection Results");
            println!("===========================");
            println!("File 1: {}", first.display());
            println!("File 2: {}", second.display());
            println!("Similarity: {:.*}%\n", config.report.precision, comparison.percentage());
            println!("Interpretation: {}", band.interpretation());
        },
    }
    Ok(())
}

fn describe_failure(err: &Error) -> String {
    match err {
        Error::EmptyInput(_) => format!("One or both files are empty ({})", err),
        Error::Decoding(_) => format!("Input is not valid UTF-8 text ({})", err),
        _ => err.to_string(),
    }
}

fn run_single(config: &TashabuhConfig, first: &Path, second: &Path) -> Result<ExitCode> {
    info!("Comparing {:?} and {:?} ({})", first, second, config.parser.describe());
    let mut detector = PlagiarismDetector::new(config)?;

    match detector.compare_files(first, second) {
        Ok(comparison) => {
            print_report(config, first, second, &comparison)?;
            Ok(ExitCode::SUCCESS)
        },
        Err(e) => {
            if e.is_input_error() {
                info!("Comparison rejected input: {}", e);
            }
            eprintln!("Error: {}", describe_failure(&e));
            Ok(ExitCode::FAILURE)
        },
    }
}

fn run_batch(config: TashabuhConfig, pairs_path: &Path, output: Option<&Path>) -> Result<ExitCode> {
    let pairs = load_pairs(pairs_path)?;
    let precision = config.report.precision;
    let matcher = ParallelMatcher::new(config)?;

    let progress = ProgressBar::new(pairs.len() as u64);
    progress.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar()));
    progress.set_message("comparing");

    let outcomes = matcher.compare_pairs(&pairs, Some(&progress));
    progress.finish_with_message("done");

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::file_access(path, e))?;
            write_outcomes(file, &outcomes, precision)?;
            info!("Wrote {} results to {:?}", outcomes.len(), path);
        },
        None => write_outcomes(io::stdout().lock(), &outcomes, precision)?,
    }

    if outcomes.iter().all(|o| o.result.is_ok()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    init_logging(config.processor.get_log_level(), args.log_file.as_deref())?;
    info!("Starting with ngram size {} over {} units",
        config.generator.ngram_size, config.generator.hash_unit.as_str());

    if let Some(pairs_path) = &args.pairs {
        return run_batch(config, pairs_path, args.output.as_deref());
    }

    match (&args.first, &args.second) {
        (Some(first), Some(second)) => run_single(&config, first, second),
        _ => Err(Error::config("two documents or --pairs are required")),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {}", e);
            eprintln!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
