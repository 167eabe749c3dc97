//! Renderer options. Every field has a default, so `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BARCODE_MARGIN_PX, BARCODE_TEXT_MARGIN_PX, DEFAULT_DOCUMENT_TITLE};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unit used for the label padding in the print stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingUnit {
    /// Pixels inside the millimeter frame. Needs an engine that mixes units.
    #[default]
    Px,
    /// Pixels converted at 96 DPI.
    Mm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub padding_unit: PaddingUnit,
    pub barcode_margin_px: u32,
    pub barcode_text_margin_px: u32,
    /// Print the human-readable code under the bars.
    pub display_value: bool,
    /// Print and close the window as soon as the document loads.
    pub auto_print: bool,
    pub document_title: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            padding_unit: PaddingUnit::Px,
            barcode_margin_px: BARCODE_MARGIN_PX,
            barcode_text_margin_px: BARCODE_TEXT_MARGIN_PX,
            display_value: true,
            auto_print: true,
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
        }
    }
}

impl RendererConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
