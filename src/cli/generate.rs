//! The generation flow: sanitize, truncate, encode, write.

use anyhow::{Result, bail};
use scannable::{
    OutputConfig, QR_SCANNER_WARN_CHARS, Request, Symbology, render_symbology, sanitize_filename,
    sanitize_text, truncate_chars, write_png,
};

use crate::cli::Cli;

/// Execute one generation request parsed from the command line.
pub fn handle(cli: Cli) -> Result<()> {
    let request = Request {
        text: sanitize_text(&cli.text.join(" ")),
        selection: cli.code_type.into(),
        base_filename: sanitize_filename(&cli.filename),
    };
    generate(&request, &OutputConfig::default())
}

fn generate(request: &Request, config: &OutputConfig) -> Result<()> {
    let text_chars = request.text.chars().count();
    let selected = request.selection.symbologies();
    let mut failures = 0usize;

    for &symbology in selected {
        if symbology == Symbology::Qr && text_chars > QR_SCANNER_WARN_CHARS {
            println!(
                "[Warning] Your input is over {} characters. Many non-specialty QR code \
                 scanners may only decode the first {} characters or less.",
                QR_SCANNER_WARN_CHARS,
                QR_SCANNER_WARN_CHARS + 1
            );
        }

        let (input, dropped) = truncate_chars(&request.text, symbology.max_chars());
        let image = match render_symbology(symbology, &input) {
            Ok(image) => image,
            Err(err) => {
                eprintln!("[{}] {}", symbology.tag(), err);
                failures += 1;
                continue;
            }
        };

        let path = config.target_path(symbology, &request.base_filename);
        write_png(&image, &path)?;
        println!("{} saved to {}", symbology.artifact(), path.display());
        if dropped > 0 {
            println!(
                "[{}] Input was truncated by {} characters to fit the {} standard \
                 (max {} characters).",
                symbology.tag(),
                dropped,
                symbology.standard(),
                symbology.max_chars()
            );
        }
    }

    if failures > 0 {
        bail!("{} of {} encoding attempts failed", failures, selected.len());
    }
    Ok(())
}
