//! CLI argument definitions for the data profiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dprof",
    version,
    about = "Data profiler - analyze data files and emit structured field metadata",
    long_about = "Analyze tabular data files and generate a JSON profile.\n\n\
                  Supports delimited and fixed-width text, CSV, Excel workbooks,\n\
                  JSON, and XML sources. Each column is described by an inferred\n\
                  type, maximum length, optional value pattern and uniqueness\n\
                  flag, and a few example values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a data file and generate field metadata.
    Analyze(AnalyzeArgs),

    /// List supported source formats and their file extensions.
    Formats,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Input file to analyze.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Detect value patterns in string fields.
    #[arg(short = 'p', long = "patterns")]
    pub patterns: bool,

    /// Check each field for uniqueness.
    #[arg(short = 'u', long = "unique")]
    pub unique: bool,

    /// Number of records to sample for inference (the reported record
    /// count always covers the whole file).
    #[arg(short = 's', long = "sample", value_name = "N")]
    pub sample: Option<usize>,

    /// File encoding (default: utf-8).
    #[arg(short = 'e', long = "encoding", value_name = "ENCODING")]
    pub encoding: Option<String>,

    /// Write the JSON profile to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Custom delimiter for text files.
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Fixed-width column sizes for text files (comma-separated).
    #[arg(
        short = 'w',
        long = "fixed-widths",
        value_name = "N,N,...",
        value_delimiter = ','
    )]
    pub fixed_widths: Option<Vec<usize>>,

    /// Auto-detect the delimiter from the first line of a text file.
    #[arg(long = "detect-delimiter")]
    pub detect_delimiter: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
