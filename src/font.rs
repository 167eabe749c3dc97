use serde::{Deserialize, Serialize};

/// Relative text size used by the on-screen preview, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FontToken {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl FontToken {
    pub const ALL: [FontToken; 6] = [
        FontToken::Xs,
        FontToken::Sm,
        FontToken::Base,
        FontToken::Lg,
        FontToken::Xl,
        FontToken::Xxl,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FontToken::Xs => "xs",
            FontToken::Sm => "sm",
            FontToken::Base => "base",
            FontToken::Lg => "lg",
            FontToken::Xl => "xl",
            FontToken::Xxl => "2xl",
        }
    }

    /// Utility class for the preview markup, e.g. `text-xl`.
    pub fn class_name(self) -> String {
        format!("text-{}", self.name())
    }

    /// Absolute pixel size. Matches what the preview's utility classes
    /// resolve to, so printed text keeps its on-screen proportions.
    pub fn print_px(self) -> u32 {
        match self {
            FontToken::Xs => 12,
            FontToken::Sm => 14,
            FontToken::Base => 16,
            FontToken::Lg => 18,
            FontToken::Xl => 20,
            FontToken::Xxl => 24,
        }
    }
}
