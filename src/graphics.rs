//! Grayscale bitmap preview of a label at 96 DPI.
//! - Bars drawn from the encoded symbol, edges snapped to whole pixels
//! - Text laid out left to right with rusttype, one line per field
//! - Runs without a font: text is skipped, boxes and bars still drawn

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use rusttype::{point, Font, Scale};
use thiserror::Error;

use crate::barcode::Symbol;
use crate::consts::{BARCODE_TOP_GAP_PX, PLACEHOLDER_FONT_PX, TEXT_MARGIN_BOTTOM_PX};
use crate::content::ImageSource;
use crate::render::{BarcodeArea, LabelPreview};

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);
const FRAME_GRAY: Luma<u8> = Luma([200]);

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("font data could not be parsed")]
    BadFont,

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Render one line as a tight grayscale image, 1-bit looking (hard threshold).
pub fn render_text_line(font: &Font<'_>, text: &str, font_px: f32) -> GrayImage {
    let scale = Scale::uniform(font_px);
    let vm = font.v_metrics(scale);
    let ascent = vm.ascent.ceil();
    let descent = vm.descent.floor();
    let line_h = (ascent - descent).ceil().max(1.0) as u32;

    let glyphs: Vec<_> = font.layout(text, scale, point(0.0, ascent)).collect();
    let text_w = glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box().map(|bb| bb.max.x))
        .max()
        .unwrap_or(0)
        .max(0) as u32;

    let w = (text_w + 2).max(2);
    let mut img = GrayImage::from_pixel(w, line_h, WHITE);
    for g in &glyphs {
        if let Some(bb) = g.pixel_bounding_box() {
            g.draw(|x, y, v| {
                if v > 0.5 {
                    let px = x as i32 + bb.min.x;
                    let py = y as i32 + bb.min.y;
                    if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < line_h {
                        img.put_pixel(px as u32, py as u32, BLACK);
                    }
                }
            });
        }
    }
    img
}

fn fill_rect(img: &mut GrayImage, x: u32, y: u32, w: u32, h: u32, color: Luma<u8>) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

fn outline_rect(img: &mut GrayImage, x: u32, y: u32, w: u32, h: u32, color: Luma<u8>) {
    if w == 0 || h == 0 {
        return;
    }
    fill_rect(img, x, y, w, 1, color);
    fill_rect(img, x, y + h - 1, w, 1, color);
    fill_rect(img, x, y, 1, h, color);
    fill_rect(img, x + w - 1, y, 1, h, color);
}

/// Paste `top` horizontally centered on `canvas` at row `y`.
fn paste_centered(canvas: &mut GrayImage, top: &GrayImage, y: u32) {
    let x = (canvas.width() as i64 - top.width() as i64) / 2;
    imageops::overlay(canvas, top, x, y as i64);
}

pub struct LabelRasterizer<'f> {
    font: Option<Font<'f>>,
}

impl Default for LabelRasterizer<'_> {
    fn default() -> Self {
        Self::without_font()
    }
}

impl<'f> LabelRasterizer<'f> {
    pub fn without_font() -> Self {
        Self { font: None }
    }

    pub fn with_font(font_bytes: &'f [u8]) -> Result<Self, RasterError> {
        let font = Font::try_from_bytes(font_bytes).ok_or(RasterError::BadFont)?;
        Ok(Self { font: Some(font) })
    }

    fn text(&self, text: &str, font_px: u32) -> Option<GrayImage> {
        match &self.font {
            Some(font) if !text.is_empty() => Some(render_text_line(font, text, font_px as f32)),
            _ => None,
        }
    }

    pub fn symbol(&self, symbol: &Symbol) -> GrayImage {
        let p = &symbol.params;
        let w = symbol.width_px().ceil().max(1.0) as u32;
        let mut img = GrayImage::from_pixel(w, symbol.height_px().max(1), WHITE);
        for (start, len) in symbol.bar_runs() {
            let x0 = (p.margin_px as f64 + start as f64 * p.width_factor).round() as u32;
            let x1 = (p.margin_px as f64 + (start + len) as f64 * p.width_factor).round() as u32;
            fill_rect(&mut img, x0, p.margin_px, x1.saturating_sub(x0).max(1), p.height_px, BLACK);
        }
        if p.display_value {
            if let Some(hri) = self.text(&symbol.text, p.font_size) {
                paste_centered(&mut img, &hri, p.margin_px + p.height_px + p.text_margin_px);
            }
        }
        img
    }

    pub fn placeholder(&self, message: &str, width_px: u32, height_px: u32) -> GrayImage {
        let mut img = GrayImage::from_pixel(width_px.max(1), height_px.max(1), WHITE);
        outline_rect(&mut img, 0, 0, width_px, height_px, BLACK);
        if let Some(text) = self.text(message, PLACEHOLDER_FONT_PX) {
            let y = height_px.saturating_sub(text.height()) / 2;
            paste_centered(&mut img, &text, y);
        }
        img
    }

    fn barcode(&self, area: &BarcodeArea, max_width: u32) -> Option<GrayImage> {
        let img = match area {
            BarcodeArea::Symbol(symbol) => self.symbol(symbol),
            BarcodeArea::Placeholder { message, width_px, height_px, .. } => {
                self.placeholder(message, width_px.floor() as u32, *height_px)
            }
            BarcodeArea::Blank => return None,
        };
        if img.width() <= max_width || max_width == 0 {
            return Some(img);
        }
        let h = (img.height() as u64 * max_width as u64 / img.width() as u64).max(1) as u32;
        Some(imageops::resize(&img, max_width, h, FilterType::Nearest))
    }

    fn photo(&self, source: &ImageSource, box_px: u32) -> Result<GrayImage, RasterError> {
        match source {
            ImageSource::Embedded { bytes, .. } => {
                let decoded = image::load_from_memory(bytes)?;
                Ok(decoded.resize(box_px, box_px, FilterType::Triangle).to_luma8())
            }
            _ => {
                let mut frame = GrayImage::from_pixel(box_px.max(1), box_px.max(1), WHITE);
                outline_rect(&mut frame, 0, 0, box_px, box_px, FRAME_GRAY);
                Ok(frame)
            }
        }
    }

    /// Image on top, barcode at the bottom, text centered in between.
    pub fn rasterize(&self, preview: &LabelPreview) -> Result<GrayImage, RasterError> {
        let g = &preview.geometry;
        let layout = preview.layout;
        let content = &preview.content;
        let mut canvas = GrayImage::from_pixel(g.frame_width_px, g.frame_height_px, WHITE);

        let mut top = g.padding_px;
        if g.image_box_px > 0 {
            let photo = self.photo(&content.image, g.image_box_px)?;
            let y = top + g.image_box_px.saturating_sub(photo.height()) / 2;
            paste_centered(&mut canvas, &photo, y);
            top += g.image_box_px;
        }

        let mut bottom = g.frame_height_px.saturating_sub(g.padding_px);
        let barcode_max = g.barcode_max_width_px.floor() as u32;
        if let Some(barcode) = self.barcode(&preview.barcode, barcode_max) {
            bottom = bottom.saturating_sub(barcode.height());
            paste_centered(&mut canvas, &barcode, bottom);
            bottom = bottom.saturating_sub(BARCODE_TOP_GAP_PX);
        }

        let code_line = format!("{}{}", crate::consts::PRODUCT_CODE_PREFIX, content.product_code);
        let lines: Vec<GrayImage> = [
            self.text(&content.product_name, layout.product_name_font_size.print_px()),
            self.text(&content.brand, layout.brand_font_size.print_px()),
            self.text(&code_line, layout.product_code_font_size.print_px()),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !lines.is_empty() {
            let block_h: u32 = lines.iter().map(|l| l.height()).sum::<u32>()
                + TEXT_MARGIN_BOTTOM_PX * (lines.len() as u32 - 1);
            let mut y = top + bottom.saturating_sub(top).saturating_sub(block_h) / 2;
            for line in &lines {
                paste_centered(&mut canvas, line, y);
                y += line.height() + TEXT_MARGIN_BOTTOM_PX;
            }
        }
        Ok(canvas)
    }
}
