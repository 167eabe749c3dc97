use serde::Serialize;

use crate::catalog::LabelLayout;
use crate::consts::BARCODE_WIDTH_RATIO;

/// Pixel sizes for the on-screen preview. Depends on the layout only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenGeometry {
    pub frame_width_px: u32,
    pub frame_height_px: u32,
    pub padding_px: u32,
    pub image_box_px: u32,
    pub barcode_max_width_px: f64,
}

impl ScreenGeometry {
    /// Width left inside the padding.
    pub fn content_width_px(&self) -> u32 {
        self.frame_width_px.saturating_sub(self.padding_px * 2)
    }

    pub fn content_height_px(&self) -> u32 {
        self.frame_height_px.saturating_sub(self.padding_px * 2)
    }
}

/// Shared by preview and print so the barcode keeps its proportion.
pub fn barcode_max_width_px(frame_width_px: u32) -> f64 {
    frame_width_px as f64 * BARCODE_WIDTH_RATIO
}

pub fn compute_screen_geometry(layout: &LabelLayout) -> ScreenGeometry {
    ScreenGeometry {
        frame_width_px: layout.width_px,
        frame_height_px: layout.height_px,
        padding_px: layout.padding_px,
        image_box_px: layout.image_size_px,
        barcode_max_width_px: barcode_max_width_px(layout.width_px),
    }
}
