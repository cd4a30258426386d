//! The fixed set of style attributes a document position can carry.

use serde::{Deserialize, Serialize};

use crate::RgbColor;

/// The style attributes active at a document position.
///
/// Every attribute is independent; two style sets are equal only when all
/// fields are equal (colors compare by exact channel values). The default
/// value is plain, unstyled text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub text_color: Option<RgbColor>,
    pub background_color: Option<RgbColor>,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub link_url: Option<String>,
}

impl StyleSet {
    /// Plain text: no attribute active.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// `true` when no attribute is active.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    #[must_use]
    pub fn with_strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: RgbColor) -> Self {
        self.text_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: RgbColor) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font_family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    #[must_use]
    pub fn with_link_url<S: Into<String>>(mut self, url: S) -> Self {
        self.link_url = Some(url.into());
        self
    }
}
