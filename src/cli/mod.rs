//! Command-line interface wiring for the `scannable` binary.

pub mod common;
pub mod generate;

use anyhow::Result;
use clap::Parser;

use crate::cli::common::CodeTypeArg;

/// Parsed CLI entrypoint for the `scannable` binary.
#[derive(Parser, Debug)]
#[command(
    name = "scannable",
    version,
    about = "Convert text to scannable QR code and CODE 128 barcode PNGs",
    after_help = "Output files:\n  \
        QR codes are prefixed with 'QR_'\n  \
        Barcodes are prefixed with 'BC_'\n\n\
        Examples:\n  \
        scannable \"Hello World\"\n  \
        scannable \"Hello World\" --type qr\n  \
        scannable \"Hello World\" --type barcode --filename mycode.png"
)]
pub struct Cli {
    /// Text to encode; multiple words are joined with spaces.
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Which code(s) to generate.
    #[arg(
        long = "type",
        value_enum,
        ignore_case = true,
        default_value_t = CodeTypeArg::Both
    )]
    pub code_type: CodeTypeArg,

    /// Base name for the output files (`.png` is appended when missing).
    #[arg(long, default_value = scannable::DEFAULT_FILENAME)]
    pub filename: String,
}

/// Execute the parsed invocation.
pub fn run(cli: Cli) -> Result<()> {
    generate::handle(cli)
}
