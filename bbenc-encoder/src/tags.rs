//! BBCode tags and their derivation from style attributes.

use bbenc_document::{RgbColor, StyleSet};

/// A single BBCode tag derived from one style attribute.
///
/// Variants are declared in canonical nesting order, outermost first; that
/// order is what [`tags_for`] emits and what the tag stack relies on for
/// deterministic output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Tag {
    Url(String),
    Font(String),
    Size(u32),
    Color(RgbColor),
    BgColor(RgbColor),
    Bold,
    Italic,
    Underline,
    Strike,
}

impl Tag {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Url(_) => "url",
            Self::Font(_) => "font",
            Self::Size(_) => "size",
            Self::Color(_) => "color",
            Self::BgColor(_) => "bgcolor",
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Underline => "u",
            Self::Strike => "s",
        }
    }

    /// Opening form, e.g. `[b]` or `[url=https://example.com]`.
    pub(crate) fn open_text(&self) -> String {
        match self {
            Self::Url(address) => format!("[url={address}]"),
            Self::Font(family) => format!("[font={family}]"),
            Self::Size(size) => format!("[size={size}]"),
            Self::Color(color) => format!("[color={color}]"),
            Self::BgColor(color) => format!("[bgcolor={color}]"),
            Self::Bold | Self::Italic | Self::Underline | Self::Strike => {
                format!("[{}]", self.name())
            }
        }
    }

    /// Closing form, e.g. `[/b]`. Value-carrying tags close by name only.
    pub(crate) fn close_text(&self) -> String {
        format!("[/{}]", self.name())
    }
}

/// Derive the tag set for a style, in canonical nesting order.
///
/// A plain style yields no tags. Attribute values are emitted best-effort:
/// a link URL without a scheme is passed through verbatim (with a warning
/// breadcrumb) rather than rejected, per the trusted-caller model.
pub(crate) fn tags_for(style: &StyleSet) -> Vec<Tag> {
    let mut tags = Vec::new();
    if let Some(url) = &style.link_url {
        if !url.contains("://") {
            tracing::warn!(url = %url, "link URL has no scheme, emitting verbatim");
        }
        tags.push(Tag::Url(url.clone()));
    }
    if let Some(family) = &style.font_family {
        tags.push(Tag::Font(family.clone()));
    }
    if let Some(size) = style.font_size {
        tags.push(Tag::Size(size));
    }
    if let Some(color) = style.text_color {
        tags.push(Tag::Color(color));
    }
    if let Some(color) = style.background_color {
        tags.push(Tag::BgColor(color));
    }
    if style.bold {
        tags.push(Tag::Bold);
    }
    if style.italic {
        tags.push(Tag::Italic);
    }
    if style.underline {
        tags.push(Tag::Underline);
    }
    if style.strikethrough {
        tags.push(Tag::Strike);
    }
    tags
}
