use serde::{Deserialize, Serialize};

use crate::barcode::BarcodeFormat;
use crate::consts::PLACEHOLDER_IMAGE_SRC;

/// Where the product photo comes from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Placeholder,
    Url { href: String },
    Embedded { mime: String, bytes: Vec<u8> },
}

impl ImageSource {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ImageSource::Placeholder)
    }

    /// Value for an `<img src>` attribute.
    pub fn src(&self) -> String {
        use base64::Engine as _;
        match self {
            ImageSource::Placeholder => PLACEHOLDER_IMAGE_SRC.to_string(),
            ImageSource::Url { href } => href.clone(),
            ImageSource::Embedded { mime, bytes } => format!(
                "data:{};base64,{}",
                mime,
                base64::engine::general_purpose::STANDARD.encode(bytes)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductContent {
    pub product_name: String,
    pub product_code: String,
    pub brand: String,
    #[serde(default)]
    pub image: ImageSource,
    #[serde(default)]
    pub barcode_format: BarcodeFormat,
}

impl Default for ProductContent {
    fn default() -> Self {
        Self {
            product_name: "Nome do Produto".into(),
            product_code: "123456789012".into(),
            brand: "Sua Marca".into(),
            image: ImageSource::Placeholder,
            barcode_format: BarcodeFormat::default(),
        }
    }
}
