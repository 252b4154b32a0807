//! Symbology selection and per-symbology encoding limits.

/// Inputs longer than this often exceed what non-specialty QR scanners
/// reliably decode.
pub const QR_SCANNER_WARN_CHARS: usize = 249;

/// Symbologies this tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    Qr,
    Code128,
}

impl Symbology {
    /// Practical input cap before the printed code becomes unreliable to scan.
    pub fn max_chars(self) -> usize {
        match self {
            Symbology::Qr => 1000,
            Symbology::Code128 => 80,
        }
    }

    /// Prefix prepended to the base output filename.
    pub fn file_prefix(self) -> &'static str {
        match self {
            Symbology::Qr => "QR_",
            Symbology::Code128 => "BC_",
        }
    }

    /// Short tag used in bracketed console messages.
    pub fn tag(self) -> &'static str {
        match self {
            Symbology::Qr => "QR",
            Symbology::Code128 => "Barcode",
        }
    }

    /// Name of the written artifact in confirmation lines.
    pub fn artifact(self) -> &'static str {
        match self {
            Symbology::Qr => "QR code",
            Symbology::Code128 => "Barcode",
        }
    }

    /// Standard named in truncation notices.
    pub fn standard(self) -> &'static str {
        match self {
            Symbology::Qr => "QR code",
            Symbology::Code128 => "CODE 128",
        }
    }
}

/// Which symbologies one invocation should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Qr,
    Barcode,
    Both,
}

impl Selection {
    /// Expand the selection into the symbologies to render, in output order.
    pub fn symbologies(self) -> &'static [Symbology] {
        match self {
            Selection::Qr => &[Symbology::Qr],
            Selection::Barcode => &[Symbology::Code128],
            Selection::Both => &[Symbology::Qr, Symbology::Code128],
        }
    }
}

/// One invocation's worth of work, built from sanitized command-line input.
#[derive(Debug, Clone)]
pub struct Request {
    pub text: String,
    pub selection: Selection,
    pub base_filename: String,
}
