use crate::consts::{PLACEHOLDER_FONT_PX, TEXT_LINE_HEIGHT, TEXT_MARGIN_BOTTOM_PX};
use crate::stylesheet::{Length, PrintStyleSheet};
use crate::units::format_number;

pub const LABEL_CLASS: &str = "product-label-print";

/// Append one `selector { decl; ... }` block, one declaration per line.
fn css_rule(buf: &mut String, selector: &str, decls: &[(&str, String)]) {
    buf.push_str(selector);
    buf.push_str(" {\n");
    for (prop, value) in decls {
        buf.push_str("  ");
        buf.push_str(prop);
        buf.push_str(": ");
        buf.push_str(value);
        buf.push_str(";\n");
    }
    buf.push_str("}\n");
}

fn px(v: u32) -> String {
    format!("{v}px")
}

fn s(v: &str) -> String {
    v.to_string()
}

pub fn write_stylesheet(sheet: &PrintStyleSheet) -> String {
    let page = &sheet.page;
    let frame = &sheet.frame;
    let label = format!(".{LABEL_CLASS}");
    let mut buf = String::new();

    css_rule(&mut buf, "@page", &[
        ("size", format!("{} {}", Length::Mm(page.width_mm), Length::Mm(page.height_mm))),
        ("margin", Length::Mm(page.margin_mm).to_string()),
    ]);
    css_rule(&mut buf, "body", &[
        ("margin", s("0")),
        ("padding", s("0")),
        ("-webkit-print-color-adjust", s("exact")),
        ("print-color-adjust", s("exact")),
        ("display", s("flex")),
        ("justify-content", s("center")),
        ("align-items", s("center")),
        ("min-height", s("100vh")),
    ]);
    css_rule(&mut buf, &label, &[
        ("width", Length::Mm(frame.width_mm).to_string()),
        ("height", Length::Mm(frame.height_mm).to_string()),
        ("padding", frame.padding.to_string()),
        ("box-sizing", s("border-box")),
        ("box-shadow", s("none")),
        ("border", s("none")),
        ("display", s("flex")),
        ("flex-direction", s("column")),
        ("align-items", s("center")),
        ("justify-content", s("space-between")),
        ("text-align", s("center")),
        ("overflow", s("hidden")),
        ("background-color", s("white")),
        ("color", s("black")),
        ("page-break-after", s("auto")),
    ]);
    css_rule(&mut buf, &format!("{label} img"), &[
        ("max-width", px(sheet.image_max_px)),
        ("max-height", px(sheet.image_max_px)),
        ("object-fit", s("contain")),
    ]);
    css_rule(&mut buf, &format!("{label} h3"), &[
        ("font-size", px(sheet.text.product_name_px)),
        ("font-weight", s("bold")),
        ("line-height", format_number(TEXT_LINE_HEIGHT)),
        ("margin", format!("0 0 {}", px(TEXT_MARGIN_BOTTOM_PX))),
        ("color", s("black")),
    ]);
    css_rule(&mut buf, &format!("{label} .brand"), &[
        ("font-size", px(sheet.text.brand_px)),
        ("margin", format!("0 0 {}", px(TEXT_MARGIN_BOTTOM_PX))),
        ("color", s("black")),
    ]);
    css_rule(&mut buf, &format!("{label} .product-code"), &[
        ("font-size", px(sheet.text.product_code_px)),
        ("margin", s("0")),
        ("color", s("black")),
    ]);
    css_rule(&mut buf, &format!("{label} svg"), &[
        ("width", s("100%")),
        ("max-width", Length::Px(sheet.barcode_max_width_px).to_string()),
        ("height", s("auto")),
    ]);
    css_rule(&mut buf, &format!("{label} .barcode-error"), &[
        ("max-width", Length::Px(sheet.barcode_max_width_px).to_string()),
        ("font-size", px(PLACEHOLDER_FONT_PX)),
        ("color", s("red")),
    ]);
    buf
}
