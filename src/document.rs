//! Standalone HTML page for a print surface: stylesheet, label markup and
//! optionally a script that prints and closes the window once loaded.

use crate::config::RendererConfig;
use crate::consts::PRODUCT_CODE_PREFIX;
use crate::content::ProductContent;
use crate::css::LABEL_CLASS;
use crate::markup::escape;
use crate::render::BarcodeArea;
use crate::stylesheet::PrintStyleSheet;

const AUTO_PRINT_SCRIPT: &str =
    "<script>window.onload = function() { window.print(); window.close(); };</script>";

#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub title: String,
    pub css: String,
    pub label_markup: String,
    pub auto_print: bool,
}

/// Image, name, brand, code and barcode, top to bottom.
pub fn label_markup(content: &ProductContent, barcode: &BarcodeArea) -> String {
    let alt = if content.product_name.is_empty() {
        "Imagem do produto"
    } else {
        content.product_name.as_str()
    };
    let mut html = format!("<div class=\"{LABEL_CLASS}\">\n");
    html.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\">\n",
        escape(&content.image.src()),
        escape(alt)
    ));
    html.push_str("<div class=\"text\">\n");
    html.push_str(&format!("<h3>{}</h3>\n", escape(&content.product_name)));
    html.push_str(&format!("<p class=\"brand\">{}</p>\n", escape(&content.brand)));
    html.push_str(&format!(
        "<p class=\"product-code\">{}{}</p>\n",
        escape(PRODUCT_CODE_PREFIX),
        escape(&content.product_code)
    ));
    html.push_str("</div>\n");
    html.push_str(&format!("<div class=\"barcode\">{}</div>\n", barcode.to_markup()));
    html.push_str("</div>\n");
    html
}

impl PrintDocument {
    pub fn build(
        config: &RendererConfig,
        stylesheet: &PrintStyleSheet,
        content: &ProductContent,
        barcode: &BarcodeArea,
    ) -> Self {
        Self {
            title: config.document_title.clone(),
            css: stylesheet.to_css(),
            label_markup: label_markup(content, barcode),
            auto_print: config.auto_print,
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(&self.title)));
        html.push_str("<style>\n");
        html.push_str(&self.css);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str(&self.label_markup);
        if self.auto_print {
            html.push_str(AUTO_PRINT_SCRIPT);
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}
