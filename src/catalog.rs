//! The fixed set of physical label templates.
//!
//! Pixel sizes are authored next to the millimeter sizes and must equal
//! `units::mm_to_px` of them; the tests hold every entry to that. Padding,
//! photo box and barcode parameters are tuned by hand per size.

use serde::Serialize;
use tracing::debug;

use crate::font::FontToken;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLayout {
    pub id: &'static str,
    pub display_name: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
    pub width_px: u32,
    pub height_px: u32,
    pub padding_px: u32,
    pub image_size_px: u32,
    pub barcode_height_px: u32,
    pub barcode_width_factor: f64,
    pub barcode_font_size: u32,
    pub product_name_font_size: FontToken,
    pub brand_font_size: FontToken,
    pub product_code_font_size: FontToken,
}

pub static CATALOG: [LabelLayout; 4] = [
    LabelLayout {
        id: "standard",
        display_name: "Padrão (100x150mm)",
        width_mm: 100.0,
        height_mm: 150.0,
        width_px: 378,
        height_px: 567,
        padding_px: 16,
        image_size_px: 128,
        barcode_height_px: 60,
        barcode_width_factor: 2.0,
        barcode_font_size: 14,
        product_name_font_size: FontToken::Xl,
        brand_font_size: FontToken::Base,
        product_code_font_size: FontToken::Sm,
    },
    LabelLayout {
        id: "medium",
        display_name: "Média (75x100mm)",
        width_mm: 75.0,
        height_mm: 100.0,
        width_px: 283,
        height_px: 378,
        padding_px: 12,
        image_size_px: 96,
        barcode_height_px: 50,
        barcode_width_factor: 1.8,
        barcode_font_size: 12,
        product_name_font_size: FontToken::Lg,
        brand_font_size: FontToken::Base,
        product_code_font_size: FontToken::Sm,
    },
    LabelLayout {
        id: "small",
        display_name: "Pequena (50x75mm)",
        width_mm: 50.0,
        height_mm: 75.0,
        width_px: 189,
        height_px: 283,
        padding_px: 8,
        image_size_px: 64,
        barcode_height_px: 40,
        barcode_width_factor: 1.5,
        barcode_font_size: 10,
        product_name_font_size: FontToken::Base,
        brand_font_size: FontToken::Sm,
        product_code_font_size: FontToken::Xs,
    },
    LabelLayout {
        id: "large",
        display_name: "Grande (150x200mm)",
        width_mm: 150.0,
        height_mm: 200.0,
        width_px: 567,
        height_px: 756,
        padding_px: 24,
        image_size_px: 192,
        barcode_height_px: 80,
        barcode_width_factor: 2.5,
        barcode_font_size: 18,
        product_name_font_size: FontToken::Xxl,
        brand_font_size: FontToken::Lg,
        product_code_font_size: FontToken::Base,
    },
];

pub fn layouts() -> &'static [LabelLayout] {
    &CATALOG
}

pub fn default_layout() -> &'static LabelLayout {
    &CATALOG[0]
}

pub fn find(id: &str) -> Option<&'static LabelLayout> {
    CATALOG.iter().find(|layout| layout.id == id)
}

/// Exact id match, else the default layout. Never fails.
pub fn resolve(id: &str) -> &'static LabelLayout {
    match find(id) {
        Some(layout) => layout,
        None => {
            debug!(id, fallback = default_layout().id, "unknown layout id");
            default_layout()
        }
    }
}
