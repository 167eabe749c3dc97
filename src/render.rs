//! Turns a layout and product content into preview and print output.
//!
//! Geometry and stylesheet come from the same `LabelLayout`, so the preview
//! and the printed label never disagree. The barcode goes through the
//! injected encoder; a failed encode degrades to a placeholder.

use serde::Serialize;
use tracing::{debug, warn};

use crate::barcode::{
    BarcodeEncoder, BarcodeFormat, BarcodeParams, EncodingError, LinearEncoder, Symbol,
};
use crate::catalog::LabelLayout;
use crate::config::RendererConfig;
use crate::consts::PLACEHOLDER_FONT_PX;
use crate::content::ProductContent;
use crate::document::PrintDocument;
use crate::geometry::{compute_screen_geometry, ScreenGeometry};
use crate::markup::escape;
use crate::stylesheet::{compute_print_stylesheet_with, PrintStyleSheet};
use crate::units::format_number;

/// What fills the barcode row of a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BarcodeArea {
    Symbol(Symbol),
    /// Encoding failed; show `message` in a box of the barcode's size.
    Placeholder {
        message: String,
        width_px: f64,
        height_px: u32,
        #[serde(skip)]
        error: EncodingError,
    },
    /// No product code yet.
    Blank,
}

impl BarcodeArea {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, BarcodeArea::Placeholder { .. })
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            BarcodeArea::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn to_markup(&self) -> String {
        match self {
            BarcodeArea::Symbol(symbol) => symbol.to_svg(),
            BarcodeArea::Placeholder { message, width_px, height_px, .. } => format!(
                "<svg class=\"barcode-error\" xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}px\" \
                 height=\"{h}px\" viewBox=\"0 0 {w} {h}\"><text x=\"50%\" y=\"50%\" \
                 dominant-baseline=\"middle\" text-anchor=\"middle\" fill=\"red\" \
                 font-size=\"{font}\">{text}</text></svg>",
                w = format_number(*width_px),
                h = height_px,
                font = PLACEHOLDER_FONT_PX,
                text = escape(message),
            ),
            BarcodeArea::Blank => String::from("<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>"),
        }
    }
}

pub fn placeholder_message(format: BarcodeFormat) -> String {
    format!("Erro: Código inválido para o formato {}", format.id())
}

/// Everything the preview needs for one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPreview {
    pub layout: &'static LabelLayout,
    pub geometry: ScreenGeometry,
    pub content: ProductContent,
    pub barcode: BarcodeArea,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutRenderer<E = LinearEncoder> {
    encoder: E,
    config: RendererConfig,
}

impl<E: BarcodeEncoder> LayoutRenderer<E> {
    pub fn new(encoder: E) -> Self {
        Self::with_config(encoder, RendererConfig::default())
    }

    pub fn with_config(encoder: E, config: RendererConfig) -> Self {
        Self { encoder, config }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn screen_geometry(&self, layout: &LabelLayout) -> ScreenGeometry {
        compute_screen_geometry(layout)
    }

    pub fn print_stylesheet(&self, layout: &LabelLayout) -> PrintStyleSheet {
        compute_print_stylesheet_with(layout, self.config.padding_unit)
    }

    pub fn barcode_params(&self, layout: &LabelLayout) -> BarcodeParams {
        BarcodeParams {
            margin_px: self.config.barcode_margin_px,
            text_margin_px: self.config.barcode_text_margin_px,
            display_value: self.config.display_value,
            ..BarcodeParams::for_layout(layout)
        }
    }

    pub fn render_barcode(&self, layout: &LabelLayout, content: &ProductContent) -> BarcodeArea {
        if content.product_code.is_empty() {
            return BarcodeArea::Blank;
        }
        let params = self.barcode_params(layout);
        let format = content.barcode_format;
        match self.encoder.encode(&content.product_code, format, &params) {
            Ok(symbol) => {
                debug!(format = format.id(), modules = symbol.modules.len(), "barcode encoded");
                BarcodeArea::Symbol(symbol)
            }
            Err(error) => {
                warn!(
                    format = format.id(),
                    code = %content.product_code,
                    %error,
                    "barcode encoding failed, showing placeholder"
                );
                BarcodeArea::Placeholder {
                    message: placeholder_message(format),
                    width_px: self.screen_geometry(layout).barcode_max_width_px,
                    height_px: params.total_height_px(),
                    error,
                }
            }
        }
    }

    pub fn preview(&self, layout: &'static LabelLayout, content: &ProductContent) -> LabelPreview {
        LabelPreview {
            layout,
            geometry: self.screen_geometry(layout),
            content: content.clone(),
            barcode: self.render_barcode(layout, content),
        }
    }

    pub fn print_document(&self, layout: &LabelLayout, content: &ProductContent) -> PrintDocument {
        let stylesheet = self.print_stylesheet(layout);
        let barcode = self.render_barcode(layout, content);
        PrintDocument::build(&self.config, &stylesheet, content, &barcode)
    }
}
