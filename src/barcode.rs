//! Barcode boundary: symbologies, encoder parameters and the encoder seam.
//!
//! The renderer only talks to [`BarcodeEncoder`]. [`LinearEncoder`] hands
//! EAN-13, Code 128 (set B) and Code 39 to `barcoders`.

use std::fmt;
use std::str::FromStr;

use barcoders::sym::code128::Code128;
use barcoders::sym::code39::Code39;
use barcoders::sym::ean13::EAN13;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::catalog::LabelLayout;
use crate::consts::{BARCODE_MARGIN_PX, BARCODE_TEXT_MARGIN_PX};
use crate::markup::escape;
use crate::units::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[default]
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "CODE39")]
    Code39,
}

impl BarcodeFormat {
    pub const ALL: [BarcodeFormat; 3] =
        [BarcodeFormat::Ean13, BarcodeFormat::Code128, BarcodeFormat::Code39];

    /// Identifier understood by barcode renderers, e.g. `EAN13`.
    pub fn id(self) -> &'static str {
        match self {
            BarcodeFormat::Ean13 => "EAN13",
            BarcodeFormat::Code128 => "CODE128",
            BarcodeFormat::Code39 => "CODE39",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BarcodeFormat::Ean13 => "EAN-13",
            BarcodeFormat::Code128 => "Code 128",
            BarcodeFormat::Code39 => "Code 39",
        }
    }

    /// Like `from_str`, but an unknown id selects the first format.
    pub fn resolve(id: &str) -> BarcodeFormat {
        id.parse().unwrap_or_else(|_| {
            warn!(id, fallback = Self::ALL[0].id(), "unknown barcode format");
            Self::ALL[0]
        })
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BarcodeFormat {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| EncodingError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodingError {
    #[error("nothing to encode")]
    Empty,

    #[error("{format} cannot encode {len} characters")]
    InvalidLength { format: BarcodeFormat, len: usize },

    #[error("{format} cannot encode this data")]
    InvalidCharacter { format: BarcodeFormat },

    #[error("{format} check digit does not match")]
    Checksum { format: BarcodeFormat },

    #[error("{format} encoder rejected the data")]
    Rejected { format: BarcodeFormat },

    #[error("unknown barcode format {0:?}")]
    UnknownFormat(String),
}

/// Sizing handed to the encoder, taken from the selected layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarcodeParams {
    pub height_px: u32,
    pub width_factor: f64, // px per module
    pub font_size: u32,
    pub margin_px: u32,
    pub text_margin_px: u32,
    pub display_value: bool,
}

impl BarcodeParams {
    pub fn for_layout(layout: &LabelLayout) -> Self {
        Self {
            height_px: layout.barcode_height_px,
            width_factor: layout.barcode_width_factor,
            font_size: layout.barcode_font_size,
            margin_px: BARCODE_MARGIN_PX,
            text_margin_px: BARCODE_TEXT_MARGIN_PX,
            display_value: true,
        }
    }

    /// Vertical space the barcode occupies, bars plus text plus margins.
    pub fn total_height_px(&self) -> u32 {
        let text = if self.display_value { self.text_margin_px + self.font_size } else { 0 };
        self.margin_px * 2 + self.height_px + text
    }
}

/// An encoded linear symbol. `modules[i]` is true for a bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symbol {
    pub format: BarcodeFormat,
    pub modules: Vec<bool>,
    pub text: String,
    pub params: BarcodeParams,
}

impl Symbol {
    pub fn width_px(&self) -> f64 {
        self.modules.len() as f64 * self.params.width_factor + 2.0 * self.params.margin_px as f64
    }

    pub fn height_px(&self) -> u32 {
        self.params.total_height_px()
    }

    /// Contiguous bars as `(first_module, module_count)`.
    pub fn bar_runs(&self) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut start = None;
        for (i, &bar) in self.modules.iter().enumerate() {
            match (bar, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    runs.push((s, i - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.modules.len() - s));
        }
        runs
    }

    pub fn to_svg(&self) -> String {
        let p = &self.params;
        let width = self.width_px();
        let height = self.height_px();
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}px\" height=\"{h}px\" \
             viewBox=\"0 0 {w} {h}\" data-format=\"{format}\">",
            w = format_number(width),
            h = height,
            format = self.format.id(),
        );
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>",
            format_number(width),
            height
        ));
        svg.push_str("<g fill=\"#000000\">");
        for (start, len) in self.bar_runs() {
            svg.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/>",
                format_number(p.margin_px as f64 + start as f64 * p.width_factor),
                p.margin_px,
                format_number(len as f64 * p.width_factor),
                p.height_px
            ));
        }
        if p.display_value {
            svg.push_str(&format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" style=\"font: {}px monospace\">{}</text>",
                format_number(width / 2.0),
                p.margin_px + p.height_px + p.text_margin_px + p.font_size,
                p.font_size,
                escape(&self.text)
            ));
        }
        svg.push_str("</g></svg>");
        svg
    }
}

/// Turns a data string into a scannable symbol, or says why it can't.
pub trait BarcodeEncoder {
    fn encode(
        &self,
        data: &str,
        format: BarcodeFormat,
        params: &BarcodeParams,
    ) -> Result<Symbol, EncodingError>;
}

impl<E: BarcodeEncoder + ?Sized> BarcodeEncoder for &E {
    fn encode(
        &self,
        data: &str,
        format: BarcodeFormat,
        params: &BarcodeParams,
    ) -> Result<Symbol, EncodingError> {
        (**self).encode(data, format, params)
    }
}

impl<E: BarcodeEncoder + ?Sized> BarcodeEncoder for Box<E> {
    fn encode(
        &self,
        data: &str,
        format: BarcodeFormat,
        params: &BarcodeParams,
    ) -> Result<Symbol, EncodingError> {
        (**self).encode(data, format, params)
    }
}

/// [`BarcodeEncoder`] backed by the `barcoders` symbologies.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearEncoder;

// Leading character that puts barcoders' Code 128 into code set B.
const CODE128_SET_B: char = '\u{0181}';

impl BarcodeEncoder for LinearEncoder {
    fn encode(
        &self,
        data: &str,
        format: BarcodeFormat,
        params: &BarcodeParams,
    ) -> Result<Symbol, EncodingError> {
        if data.is_empty() {
            return Err(EncodingError::Empty);
        }
        let rejected = |err| encoding_error(format, data, err);
        let (bits, text) = match format {
            BarcodeFormat::Ean13 => {
                let bits = EAN13::new(data).map_err(rejected)?.encode();
                (bits, ean13_text(data))
            }
            BarcodeFormat::Code128 => {
                let input = format!("{CODE128_SET_B}{data}");
                (Code128::new(input.as_str()).map_err(rejected)?.encode(), data.to_string())
            }
            BarcodeFormat::Code39 => {
                (Code39::new(data).map_err(rejected)?.encode(), data.to_string())
            }
        };
        let modules = bits.into_iter().map(|b| b == 1).collect();
        Ok(Symbol { format, modules, text, params: params.clone() })
    }
}

fn encoding_error(
    format: BarcodeFormat,
    data: &str,
    err: barcoders::error::Error,
) -> EncodingError {
    use barcoders::error::Error;
    match err {
        Error::Character => EncodingError::InvalidCharacter { format },
        Error::Length => EncodingError::InvalidLength { format, len: data.chars().count() },
        Error::Checksum => EncodingError::Checksum { format },
        _ => EncodingError::Rejected { format },
    }
}

/// Human-readable EAN-13 text: 12 digits get the computed check digit.
fn ean13_text(digits: &str) -> String {
    if digits.len() != 12 {
        return digits.to_string();
    }
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let d = (b - b'0') as u32;
            if i % 2 == 0 { d } else { d * 3 }
        })
        .sum();
    format!("{digits}{}", (10 - sum % 10) % 10)
}
