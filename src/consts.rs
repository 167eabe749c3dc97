// Physical units and layout tuning constants

pub const PX_PER_INCH: f64 = 96.0; // CSS reference pixel
pub const MM_PER_INCH: f64 = 25.4;

/// Share of the frame width the barcode may occupy, on screen and on paper.
pub const BARCODE_WIDTH_RATIO: f64 = 0.8;

pub const BARCODE_MARGIN_PX: u32 = 5;      // quiet zone around the bars
pub const BARCODE_TEXT_MARGIN_PX: u32 = 5; // gap between bars and HRI text

pub const TEXT_LINE_HEIGHT: f64 = 1.25;
pub const TEXT_MARGIN_BOTTOM_PX: u32 = 4;
pub const BARCODE_TOP_GAP_PX: u32 = 8;     // mt-2 above the barcode row

pub const PLACEHOLDER_IMAGE_SRC: &str = "/placeholder.svg?height=100&width=100";
pub const PLACEHOLDER_FONT_PX: u32 = 12;

pub const PRODUCT_CODE_PREFIX: &str = "Cód: ";
pub const DEFAULT_DOCUMENT_TITLE: &str = "Etiqueta do Produto";
pub const PRINT_BLOCKED_NOTICE: &str = "Não foi possível abrir a janela de impressão. \
Verifique se os pop-ups estão bloqueados no seu navegador.";
