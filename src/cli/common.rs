//! Shared clap helper types for the CLI.

use clap::ValueEnum;
use scannable::Selection;

/// Code selections accepted by `--type`.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CodeTypeArg {
    Qr,
    Barcode,
    Both,
}

impl From<CodeTypeArg> for Selection {
    fn from(value: CodeTypeArg) -> Selection {
        match value {
            CodeTypeArg::Qr => Selection::Qr,
            CodeTypeArg::Barcode => Selection::Barcode,
            CodeTypeArg::Both => Selection::Both,
        }
    }
}
