use crate::consts::{MM_PER_INCH, PX_PER_INCH};

/// Millimeters to whole CSS pixels at 96 DPI, rounded to nearest.
pub fn mm_to_px(mm: f64) -> u32 {
    (mm * PX_PER_INCH / MM_PER_INCH).round().max(0.0) as u32
}

pub fn px_to_mm(px: f64) -> f64 {
    px * MM_PER_INCH / PX_PER_INCH
}

/// Shortest decimal form with at most two fractional digits, for CSS/SVG.
/// `302.40000000000003` prints as `302.4`, `2.0` as `2`.
pub fn format_number(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
