use product_label_printer::catalog::layouts;
use product_label_printer::units::mm_to_px;
use product_label_printer::*;

use crate::helpers::{init_tracing, RecordingEncoder};

#[test]
fn pixel_sizes_follow_the_96_dpi_rule() {
    for layout in layouts() {
        let expected = |mm: f64| (mm * 96.0 / 25.4).round() as u32;
        assert_eq!(layout.width_px, expected(layout.width_mm), "{}", layout.id);
        assert_eq!(layout.height_px, expected(layout.height_mm), "{}", layout.id);
        assert_eq!(layout.width_px, mm_to_px(layout.width_mm));
    }
}

#[test]
fn preview_and_print_agree_on_barcode_width() {
    for layout in layouts() {
        let screen = compute_screen_geometry(layout);
        let print = compute_print_stylesheet(layout);
        assert_eq!(screen.barcode_max_width_px, print.barcode_max_width_px, "{}", layout.id);
        assert_eq!(screen.barcode_max_width_px, screen.frame_width_px as f64 * 0.8);
    }
}

#[test]
fn padding_unit_does_not_move_the_barcode() {
    let renderer = LayoutRenderer::with_config(
        LinearEncoder,
        RendererConfig { padding_unit: PaddingUnit::Mm, ..Default::default() },
    );
    for layout in layouts() {
        assert_eq!(
            renderer.print_stylesheet(layout).barcode_max_width_px,
            renderer.screen_geometry(layout).barcode_max_width_px
        );
    }
}

#[test]
fn unknown_layout_resolves_to_first() {
    init_tracing();
    assert_eq!(resolve("sem-layout"), resolve(CATALOG[0].id));
    assert_eq!(resolve("").id, CATALOG[0].id);
}

#[test]
fn standard_layout_frame_is_378_by_567() {
    let layout = resolve("standard");
    assert!(layout.display_name.starts_with("Padrão"));
    let g = compute_screen_geometry(layout);
    assert_eq!((g.frame_width_px, g.frame_height_px), (378, 567));
}

#[test]
fn ean13_with_wrong_length_shows_placeholder() {
    init_tracing();
    let renderer = LayoutRenderer::new(LinearEncoder);
    let layout = resolve("standard");
    for code in ["12345", "12345678901234", "ABCDEFGHIJKLM"] {
        let content = ProductContent {
            product_code: code.into(),
            barcode_format: BarcodeFormat::Ean13,
            ..Default::default()
        };
        let area = renderer.render_barcode(layout, &content);
        assert!(area.is_placeholder(), "{code}");
        let markup = area.to_markup();
        assert!(markup.contains("Erro: Código inválido para o formato EAN13"));
        assert!(markup.contains("width=\"302.4px\""));
    }
}

#[test]
fn ean13_twelve_digits_encode_with_computed_check_digit() {
    let renderer = LayoutRenderer::new(LinearEncoder);
    let content = ProductContent {
        product_code: "123456789012".into(),
        barcode_format: BarcodeFormat::Ean13,
        ..Default::default()
    };
    let area = renderer.render_barcode(resolve("standard"), &content);
    let symbol = area.symbol().expect("12-digit EAN-13 encodes");
    assert_eq!(symbol.text, "1234567890128");
    assert_eq!(symbol.modules.len(), 95);
}

#[test]
fn small_layout_prints_on_a_50_by_75_page() {
    let sheet = compute_print_stylesheet(resolve("small"));
    assert_eq!((sheet.page.width_mm, sheet.page.height_mm), (50.0, 75.0));
    assert_eq!(sheet.page.margin_mm, 0.0);
    let css = sheet.to_css();
    assert!(css.contains("size: 50mm 75mm;"));
}

#[test]
fn derivations_are_repeatable() {
    for layout in layouts() {
        assert_eq!(compute_screen_geometry(layout), compute_screen_geometry(layout));
        assert_eq!(compute_print_stylesheet(layout), compute_print_stylesheet(layout));
        assert_eq!(
            compute_print_stylesheet(layout).to_css(),
            compute_print_stylesheet(layout).to_css()
        );
    }
}

#[test]
fn geometry_ignores_content() {
    let renderer = LayoutRenderer::new(LinearEncoder);
    let layout = resolve("large");
    let short = renderer.preview(layout, &ProductContent::default());
    let long = renderer.preview(
        layout,
        &ProductContent {
            product_name: "x".repeat(500),
            product_code: "A".repeat(80),
            barcode_format: BarcodeFormat::Code128,
            ..Default::default()
        },
    );
    assert_eq!(short.geometry, long.geometry);
}

#[test]
fn stub_encoder_sees_code_format_and_sizes() {
    let encoder = RecordingEncoder::default();
    let content = ProductContent { barcode_format: BarcodeFormat::Code39, ..Default::default() };
    {
        let renderer = LayoutRenderer::new(&encoder);
        renderer.render_barcode(resolve("medium"), &content);
    }
    let calls = encoder.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (data, format, params) = &calls[0];
    assert_eq!(data, "123456789012");
    assert_eq!(*format, BarcodeFormat::Code39);
    assert_eq!((params.height_px, params.font_size), (50, 12));
    assert!((params.width_factor - 1.8).abs() < f64::EPSILON);
}

#[test]
fn failing_stub_never_blanks_the_area() {
    init_tracing();
    let encoder = RecordingEncoder { fail: true, ..Default::default() };
    let renderer = LayoutRenderer::new(encoder);
    for layout in layouts() {
        let area = renderer.render_barcode(layout, &ProductContent::default());
        match area {
            BarcodeArea::Placeholder { width_px, .. } => {
                assert_eq!(width_px, compute_screen_geometry(layout).barcode_max_width_px)
            }
            other => panic!("{}: expected placeholder, got {other:?}", layout.id),
        }
    }
}
