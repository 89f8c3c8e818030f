//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`FormatArg`] - Output format options as a clap value enum
//!
//! The argument types convert into library types, so the binary holds no
//! parsing logic of its own:
//!
//! ```rust
//! use chatdigest::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatdigest", "chat.txt", "--requests"]);
//! let config = args.parser_config();
//! assert!(config.extractor.requests);
//! assert!(args.output_path().ends_with("chat_parsed.json"));
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};

use crate::config::{BlankLinePolicy, ExtractorConfig, ParserConfig};
use crate::format::OutputFormat;

/// Parse an exported chat transcript into messages, a participant summary,
/// and action items.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatdigest")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatdigest chat.txt
    chatdigest chat.txt -o report.json
    chatdigest chat.txt --format csv
    chatdigest chat.txt --requests --deadlines")]
pub struct Args {
    /// Path to the transcript file
    pub input: PathBuf,

    /// Path to output file [default: <input stem>_parsed.<ext> next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Keep blank lines inside multi-line messages
    #[arg(long)]
    pub keep_blank_lines: bool,

    /// Also report "can you / could you" requests as action items
    #[arg(long)]
    pub requests: bool,

    /// Also report "by EOD / by tomorrow / by <weekday>" phrases as action items
    #[arg(long)]
    pub deadlines: bool,

    /// Attach the deadline phrase of the source message to every action item
    #[arg(long)]
    pub deadline_hints: bool,

    /// Only print the output path
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Builds the parser configuration from the flags.
    pub fn parser_config(&self) -> ParserConfig {
        let blank_lines = if self.keep_blank_lines {
            BlankLinePolicy::Keep
        } else {
            BlankLinePolicy::Drop
        };

        ParserConfig::new()
            .with_blank_lines(blank_lines)
            .with_extractor(
                ExtractorConfig::new()
                    .with_requests(self.requests)
                    .with_deadlines(self.deadlines)
                    .with_deadline_hints(self.deadline_hints),
            )
    }

    /// Returns the explicit output path, or the default one derived from the input.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, self.format.into()))
    }
}

/// `<dir>/<stem>_parsed.<ext>` for an input at `<dir>/<stem>.<anything>`.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "chat".into(), |s| s.to_string_lossy());
    input.with_file_name(format!("{stem}_parsed.{}", format.extension()))
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// Full report as pretty JSON
    #[default]
    Json,

    /// Message table, semicolon delimited
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> OutputFormat {
        match format {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}
