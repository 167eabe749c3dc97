use tracing::debug;

use crate::barcode::{BarcodeEncoder, BarcodeFormat};
use crate::catalog::{self, LabelLayout};
use crate::content::{ImageSource, ProductContent};
use crate::print::{self, PrintJob, PrintSurface, UserNotice};
use crate::render::{LabelPreview, LayoutRenderer};

/// One editing session: the selected layout plus the product being edited.
/// Nothing is persisted; dropping the session discards the label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSession {
    layout_id: String,
    content: ProductContent,
}

impl Default for LabelSession {
    fn default() -> Self {
        Self {
            layout_id: catalog::default_layout().id.to_string(),
            content: ProductContent::default(),
        }
    }
}

impl LabelSession {
    pub fn new(content: ProductContent) -> Self {
        Self { content, ..Self::default() }
    }

    /// Always renderable: an unknown id selects the default layout.
    pub fn layout(&self) -> &'static LabelLayout {
        catalog::resolve(&self.layout_id)
    }

    pub fn content(&self) -> &ProductContent {
        &self.content
    }

    pub fn select_layout(&mut self, id: &str) {
        self.layout_id = catalog::resolve(id).id.to_string();
    }

    pub fn select_barcode_format(&mut self, id: &str) {
        self.content.barcode_format = BarcodeFormat::resolve(id);
    }

    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.content.product_name = name.into();
    }

    pub fn set_product_code(&mut self, code: impl Into<String>) {
        self.content.product_code = code.into();
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.content.brand = brand.into();
    }

    /// `None` puts the placeholder back, as clearing the file picker does.
    pub fn set_image(&mut self, image: Option<ImageSource>) {
        self.content.image = image.unwrap_or_default();
    }

    pub fn preview<E: BarcodeEncoder>(&self, renderer: &LayoutRenderer<E>) -> LabelPreview {
        renderer.preview(self.layout(), &self.content)
    }

    pub fn print<E: BarcodeEncoder>(
        &self,
        renderer: &LayoutRenderer<E>,
        surface: &dyn PrintSurface,
    ) -> Result<(), UserNotice> {
        let layout = self.layout();
        debug!(layout = layout.id, "print requested");
        let job = PrintJob {
            layout_id: layout.id,
            document: renderer.print_document(layout, &self.content),
        };
        print::dispatch(surface, &job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::LinearEncoder;

    #[test]
    fn starts_on_default_layout() {
        let session = LabelSession::default();
        assert_eq!(session.layout().id, "standard");
        assert_eq!(session.content().brand, "Sua Marca");
    }

    #[test]
    fn unknown_selection_falls_back() {
        let mut session = LabelSession::default();
        session.select_layout("small");
        assert_eq!(session.layout().id, "small");
        session.select_layout("nope");
        assert_eq!(session.layout().id, "standard");
    }

    #[test]
    fn edits_flow_into_preview() {
        let mut session = LabelSession::default();
        session.select_layout("medium");
        session.set_product_name("Camiseta Azul");
        session.select_barcode_format("CODE39");
        session.set_product_code("CAM-01");
        let preview = session.preview(&LayoutRenderer::new(LinearEncoder));
        assert_eq!(preview.geometry.frame_width_px, 283);
        assert_eq!(preview.content.product_name, "Camiseta Azul");
        assert_eq!(preview.barcode.symbol().map(|s| s.format), Some(BarcodeFormat::Code39));
    }

    #[test]
    fn clearing_image_restores_placeholder() {
        let mut session = LabelSession::default();
        session.set_image(Some(ImageSource::Url { href: "foto.png".into() }));
        assert!(!session.content().image.is_placeholder());
        session.set_image(None);
        assert!(session.content().image.is_placeholder());
    }
}
