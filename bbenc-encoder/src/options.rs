//! Encoder configuration.

/// Encoder options.
///
/// Three independent, order-insensitive flags. Use
/// [`EncoderOptions::builder()`] to construct an instance; the struct is
/// `#[non_exhaustive]` so new options can be added in minor versions.
///
/// # Example
///
/// ```
/// use bbenc_encoder::EncoderOptions;
///
/// let options = EncoderOptions::builder()
///     .enclose_in_code_tags(true)
///     .replace_tabs_with_spaces(true)
///     .build();
/// assert!(options.enclose_in_code_tags());
/// assert!(!options.strike_full_word());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct EncoderOptions {
    enclose_in_code_tags: bool,
    replace_tabs_with_spaces: bool,
    strike_full_word: bool,
}

impl EncoderOptions {
    /// Create a new builder with all options off.
    #[must_use]
    pub fn builder() -> EncoderOptionsBuilder {
        EncoderOptionsBuilder::default()
    }

    /// Whether the whole output is wrapped in `[code]...[/code]`.
    #[must_use]
    pub fn enclose_in_code_tags(&self) -> bool {
        self.enclose_in_code_tags
    }

    /// Whether each tab in literal text becomes four spaces.
    #[must_use]
    pub fn replace_tabs_with_spaces(&self) -> bool {
        self.replace_tabs_with_spaces
    }

    /// Whether strikethrough extends to cover whole words when an attribute
    /// boundary falls mid-word.
    #[must_use]
    pub fn strike_full_word(&self) -> bool {
        self.strike_full_word
    }
}

/// Builder for [`EncoderOptions`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EncoderOptionsBuilder {
    enclose_in_code_tags: bool,
    replace_tabs_with_spaces: bool,
    strike_full_word: bool,
}

impl EncoderOptionsBuilder {
    /// Wrap the entire output in `[code]...[/code]`.
    #[must_use]
    pub fn enclose_in_code_tags(mut self, enabled: bool) -> Self {
        self.enclose_in_code_tags = enabled;
        self
    }

    /// Replace each tab in literal text with four spaces.
    #[must_use]
    pub fn replace_tabs_with_spaces(mut self, enabled: bool) -> Self {
        self.replace_tabs_with_spaces = enabled;
        self
    }

    /// Extend strikethrough spans to whole-word boundaries.
    #[must_use]
    pub fn strike_full_word(mut self, enabled: bool) -> Self {
        self.strike_full_word = enabled;
        self
    }

    /// Build the [`EncoderOptions`] instance.
    #[must_use]
    pub fn build(self) -> EncoderOptions {
        EncoderOptions {
            enclose_in_code_tags: self.enclose_in_code_tags,
            replace_tabs_with_spaces: self.replace_tabs_with_spaces,
            strike_full_word: self.strike_full_word,
        }
    }
}
