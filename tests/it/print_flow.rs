use std::cell::RefCell;

use product_label_printer::*;

use crate::helpers::init_tracing;

/// Keeps every job it is handed.
#[derive(Default)]
struct CollectingSurface {
    jobs: RefCell<Vec<PrintJob>>,
}

impl PrintSurface for CollectingSurface {
    fn open(&self, job: &PrintJob) -> Result<(), PrintError> {
        self.jobs.borrow_mut().push(job.clone());
        Ok(())
    }
}

struct PopupBlocked;

impl PrintSurface for PopupBlocked {
    fn open(&self, _: &PrintJob) -> Result<(), PrintError> {
        Err(PrintError::Unavailable("window.open returned null".into()))
    }
}

#[test]
fn print_document_carries_layout_stylesheet_and_label() {
    init_tracing();
    let mut session = LabelSession::default();
    session.select_layout("small");
    session.set_product_name("Camiseta Azul");
    session.set_brand("Minha Marca");

    let surface = CollectingSurface::default();
    session.print(&LayoutRenderer::new(LinearEncoder), &surface).unwrap();

    let jobs = surface.jobs.borrow();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].layout_id, "small");
    let html = jobs[0].document.to_html();
    assert!(html.contains("<title>Etiqueta do Produto</title>"));
    assert!(html.contains("size: 50mm 75mm;"));
    assert!(html.contains("padding: 8px;"));
    assert!(html.contains("max-width: 151.2px;"));
    assert!(html.contains("<h3>Camiseta Azul</h3>"));
    assert!(html.contains("data-format=\"EAN13\""));
    assert!(html.contains("window.print()"));
}

#[test]
fn print_uses_the_same_layout_as_preview() {
    let renderer = LayoutRenderer::new(LinearEncoder);
    let mut session = LabelSession::default();
    session.select_layout("unknown");

    let preview = session.preview(&renderer);
    let surface = CollectingSurface::default();
    session.print(&renderer, &surface).unwrap();

    assert_eq!(surface.jobs.borrow()[0].layout_id, preview.layout.id);
    let sheet = renderer.print_stylesheet(preview.layout);
    assert_eq!(sheet.barcode_max_width_px, preview.geometry.barcode_max_width_px);
}

#[test]
fn blocked_surface_is_reported_not_retried() {
    init_tracing();
    let session = LabelSession::default();
    let notice = session.print(&LayoutRenderer::new(LinearEncoder), &PopupBlocked).unwrap_err();
    assert!(notice.message.contains("pop-ups estão bloqueados"));
    assert!(notice.detail.contains("window.open returned null"));
}

#[test]
fn invalid_code_still_prints_with_placeholder() {
    let mut session = LabelSession::default();
    session.select_barcode_format("EAN13");
    session.set_product_code("ABC");
    let surface = CollectingSurface::default();
    session.print(&LayoutRenderer::new(LinearEncoder), &surface).unwrap();
    let html = surface.jobs.borrow()[0].document.to_html();
    assert!(html.contains("class=\"barcode-error\""));
    assert!(html.contains("Erro: Código inválido para o formato EAN13"));
}

#[test]
fn config_file_controls_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("renderer.json");
    let json = r#"{"padding_unit":"mm","auto_print":false,"document_title":"Teste"}"#;
    std::fs::write(&path, json).unwrap();
    let config = RendererConfig::load(&path).unwrap();

    let renderer = LayoutRenderer::with_config(LinearEncoder, config);
    let html = renderer.print_document(resolve("standard"), &ProductContent::default()).to_html();
    assert!(html.contains("<title>Teste</title>"));
    assert!(html.contains("padding: 4.23mm;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn html_file_surface_writes_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let surface = HtmlFilePrintSurface::write_only(dir.path());
    let session = LabelSession::default();
    session.print(&LayoutRenderer::new(LinearEncoder), &surface).unwrap();

    let written = std::fs::read_to_string(dir.path().join("etiqueta-standard.html")).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("size: 100mm 150mm;"));
}

#[test]
fn preview_serializes_for_the_ui() {
    let preview = LabelSession::default().preview(&LayoutRenderer::new(LinearEncoder));
    let json = serde_json::to_value(&preview).unwrap();
    assert_eq!(json["layout"]["id"], "standard");
    assert_eq!(json["layout"]["product_name_font_size"], "xl");
    assert_eq!(json["geometry"]["frame_width_px"], 378);
    assert_eq!(json["barcode"]["kind"], "symbol");
    assert_eq!(json["content"]["barcode_format"], "EAN13");
}
