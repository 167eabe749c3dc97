//! Print-time description of a label: millimeters for the page and frame,
//! pixels for what sits inside it.

use std::fmt;

use serde::Serialize;

use crate::catalog::LabelLayout;
use crate::config::PaddingUnit;
use crate::geometry::barcode_max_width_px;
use crate::units::{format_number, px_to_mm};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Length {
    Px(f64),
    Mm(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Length::Px(v) => write!(f, "{}px", format_number(v)),
            Length::Mm(v) => write!(f, "{}mm", format_number(v)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageBox {
    pub width_mm: f64,
    pub height_mm: f64,
    pub margin_mm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameBox {
    pub width_mm: f64,
    pub height_mm: f64,
    pub padding: Length,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSizes {
    pub product_name_px: u32,
    pub brand_px: u32,
    pub product_code_px: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintStyleSheet {
    pub page: PageBox,
    pub frame: FrameBox,
    pub image_max_px: u32,
    pub text: TextSizes,
    pub barcode_max_width_px: f64,
}

impl PrintStyleSheet {
    pub fn to_css(&self) -> String {
        crate::css::write_stylesheet(self)
    }
}

/// Padding stays in pixels, as the preview has it.
pub fn compute_print_stylesheet(layout: &LabelLayout) -> PrintStyleSheet {
    compute_print_stylesheet_with(layout, PaddingUnit::Px)
}

pub fn compute_print_stylesheet_with(
    layout: &LabelLayout,
    padding_unit: PaddingUnit,
) -> PrintStyleSheet {
    let padding = match padding_unit {
        PaddingUnit::Px => Length::Px(layout.padding_px as f64),
        PaddingUnit::Mm => Length::Mm(px_to_mm(layout.padding_px as f64)),
    };
    PrintStyleSheet {
        page: PageBox { width_mm: layout.width_mm, height_mm: layout.height_mm, margin_mm: 0.0 },
        frame: FrameBox { width_mm: layout.width_mm, height_mm: layout.height_mm, padding },
        image_max_px: layout.image_size_px,
        text: TextSizes {
            product_name_px: layout.product_name_font_size.print_px(),
            brand_px: layout.brand_font_size.print_px(),
            product_code_px: layout.product_code_font_size.print_px(),
        },
        barcode_max_width_px: barcode_max_width_px(layout.width_px),
    }
}
