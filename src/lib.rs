//! Product label layout engine for fixed physical label sizes (96 dpi preview).
//! - Static catalog of label layouts, millimeters and matching pixels
//! - Screen geometry and print stylesheet derived from the same layout record
//! - Barcodes through an injected encoder; failures degrade to a placeholder
//! - Print document (HTML + CSS) handed to a fire-and-forget print surface
//! - Optional grayscale bitmap preview

pub mod barcode;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod content;
pub mod css;
pub mod document;
pub mod font;
pub mod geometry;
pub mod graphics;
pub mod markup;
pub mod print;
pub mod render;
pub mod session;
pub mod stylesheet;
pub mod units;

pub use barcode::{
    BarcodeEncoder, BarcodeFormat, BarcodeParams, EncodingError, LinearEncoder, Symbol,
};
pub use catalog::{resolve, LabelLayout, CATALOG};
pub use config::{ConfigError, PaddingUnit, RendererConfig};
pub use content::{ImageSource, ProductContent};
pub use document::PrintDocument;
pub use font::FontToken;
pub use geometry::{compute_screen_geometry, ScreenGeometry};
pub use graphics::{LabelRasterizer, RasterError};
pub use print::{dispatch, HtmlFilePrintSurface, PrintError, PrintJob, PrintSurface, UserNotice};
pub use render::{BarcodeArea, LabelPreview, LayoutRenderer};
pub use session::LabelSession;
pub use stylesheet::{compute_print_stylesheet, Length, PrintStyleSheet};
