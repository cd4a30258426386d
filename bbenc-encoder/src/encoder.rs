//! The style-run encoder: segmentation, transitions, and serialization.

use std::io::Write;

use bbenc_document::{StyleSet, StyledDocument, coalesce_runs};

use crate::{
    Error, EncoderOptions,
    stack::TagStack,
    strike,
    tags,
    text::{self, TAB_WIDTH},
};

/// Stateless BBCode encoding service.
///
/// Holds only the configured [`EncoderOptions`]; every encode call derives
/// its run list and tag stack fresh, so one `Encoder` can serve concurrent
/// callers on independent documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    #[must_use]
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode `document` to a BBCode string.
    ///
    /// Total on well-formed input: an empty document yields an empty string
    /// (or `[code][/code]` when code wrapping is on), and malformed
    /// attribute values pass through verbatim rather than failing.
    #[must_use]
    pub fn encode(&self, document: &StyledDocument) -> String {
        let mut chars = self.expanded_chars(document);
        if self.options.strike_full_word() {
            chars = strike::extend_strike_to_words(chars);
        }
        let runs = coalesce_runs(chars);
        tracing::trace!(runs = runs.len(), "segmented document");

        let mut body = String::new();
        let mut stack = TagStack::new();
        for run in &runs {
            stack.transition(&tags::tags_for(&run.style), &mut body);
            text::push_escaped(&mut body, &run.text);
        }
        stack.close_all(&mut body);

        if self.options.enclose_in_code_tags() {
            format!("[code]{body}[/code]")
        } else {
            body
        }
    }

    /// Encode `document` and write the result to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the writer fails; encoding itself cannot
    /// fail.
    pub fn write_to<W: Write>(
        &self,
        document: &StyledDocument,
        mut writer: W,
    ) -> Result<(), Error> {
        writer.write_all(self.encode(document).as_bytes())?;
        Ok(())
    }

    /// Flatten the document to characters with their styles, substituting
    /// tabs in literal text when configured. Tag syntax is generated later
    /// and never passes through here.
    fn expanded_chars(&self, document: &StyledDocument) -> Vec<(char, StyleSet)> {
        let mut chars = Vec::with_capacity(document.char_len());
        for (ch, style) in document.chars() {
            if ch == '\t' && self.options.replace_tabs_with_spaces() {
                chars.extend(std::iter::repeat_n((' ', style.clone()), TAB_WIDTH));
            } else {
                chars.push((ch, style.clone()));
            }
        }
        chars
    }
}

/// Encode a document with a one-off options value.
///
/// Convenience wrapper over [`Encoder::encode`].
#[must_use]
pub fn encode(document: &StyledDocument, options: EncoderOptions) -> String {
    Encoder::new(options).encode(document)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bbenc_document::RgbColor;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn doc(spans: &[(&str, StyleSet)]) -> StyledDocument {
        let mut document = StyledDocument::new();
        for (text, style) in spans {
            document.push(*text, style.clone());
        }
        document
    }

    fn encode_plain(document: &StyledDocument) -> String {
        encode(document, EncoderOptions::default())
    }

    /// Walk `output` tracking tag stack depth, asserting the stream never
    /// closes an unopened tag and ends with an empty stack.
    fn assert_balanced(output: &str) {
        let mut depth = 0_i32;
        let mut rest = output;
        while let Some(start) = rest.find('[') {
            let tail = rest.get(start..).unwrap();
            let end = tail.find(']').unwrap();
            if tail.starts_with("[/") {
                depth -= 1;
            } else {
                depth += 1;
            }
            assert!(depth >= 0, "closed an unopened tag in {output:?}");
            rest = tail.get(end + 1..).unwrap();
        }
        assert_eq!(depth, 0, "unbalanced tag stream in {output:?}");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(encode_plain(&StyledDocument::new()), "");
    }

    #[test]
    fn test_empty_document_with_code_tags() {
        let options = EncoderOptions::builder().enclose_in_code_tags(true).build();
        assert_eq!(encode(&StyledDocument::new(), options), "[code][/code]");
    }

    #[test]
    fn test_single_uniform_bold_run() {
        let document = doc(&[("TEXT", StyleSet::plain().with_bold())]);
        assert_eq!(encode_plain(&document), "[b]TEXT[/b]");
    }

    #[test]
    fn test_overlapping_attributes_nest_by_open_order() {
        // Plain "A", bold+italic "B", bold-only "C": italic closes before
        // bold since it opened after; bold stays open across B -> C.
        let document = doc(&[
            ("A", StyleSet::plain()),
            ("B", StyleSet::plain().with_bold().with_italic()),
            ("C", StyleSet::plain().with_bold()),
        ]);
        assert_eq!(encode_plain(&document), "A[b][i]B[/i]C[/b]");
    }

    #[test]
    fn test_shared_tag_not_reemitted_across_value_change() {
        let red = RgbColor::new(255, 0, 0);
        let document = doc(&[
            ("X", StyleSet::plain().with_bold()),
            ("Y", StyleSet::plain().with_bold().with_text_color(red)),
        ]);
        assert_eq!(encode_plain(&document), "[b]X[color=#FF0000]Y[/color][/b]");
    }

    #[test]
    fn test_forced_close_and_reopen_keeps_nesting_wellformed() {
        // Underline opened after bold; dropping bold forces underline to
        // close and reopen rather than letting [/b] cross [u].
        let document = doc(&[
            ("A", StyleSet::plain().with_bold().with_underline()),
            ("B", StyleSet::plain().with_underline()),
        ]);
        let output = encode_plain(&document);
        assert_eq!(output, "[b][u]A[/u][/b][u]B[/u]");
        assert_balanced(&output);
    }

    #[test]
    fn test_url_wraps_inline_styles() {
        let document = doc(&[(
            "here",
            StyleSet::plain()
                .with_bold()
                .with_link_url("https://example.com"),
        )]);
        assert_eq!(
            encode_plain(&document),
            "[url=https://example.com][b]here[/b][/url]"
        );
    }

    #[test]
    fn test_font_and_size_emit_only_present_fields() {
        let sized = doc(&[("x", StyleSet::plain().with_font_size(14))]);
        assert_eq!(encode_plain(&sized), "[size=14]x[/size]");

        let full = doc(&[(
            "x",
            StyleSet::plain().with_font_family("Monaco").with_font_size(14),
        )]);
        assert_eq!(encode_plain(&full), "[font=Monaco][size=14]x[/size][/font]");
    }

    #[test]
    fn test_background_color() {
        let document = doc(&[(
            "x",
            StyleSet::plain().with_background_color(RgbColor::new(0, 255, 127)),
        )]);
        assert_eq!(encode_plain(&document), "[bgcolor=#00FF7F]x[/bgcolor]");
    }

    #[test]
    fn test_tab_substitution_in_literal_text_only() {
        let options = EncoderOptions::builder()
            .replace_tabs_with_spaces(true)
            .build();
        let document = doc(&[("a\tb", StyleSet::plain().with_bold())]);
        assert_eq!(encode(&document, options), "[b]a    b[/b]");
    }

    #[test]
    fn test_tabs_kept_without_option() {
        let document = doc(&[("a\tb", StyleSet::plain())]);
        assert_eq!(encode_plain(&document), "a\tb");
    }

    #[test]
    fn test_strike_full_word_extends_mid_word_boundary() {
        let options = EncoderOptions::builder().strike_full_word(true).build();
        let document = doc(&[
            ("wo", StyleSet::plain()),
            ("nder", StyleSet::plain().with_strikethrough()),
            ("ful", StyleSet::plain()),
        ]);
        assert_eq!(encode(&document, options), "[s]wonderful[/s]");
    }

    #[test]
    fn test_strike_extension_leaves_other_attributes_alone() {
        let options = EncoderOptions::builder().strike_full_word(true).build();
        // Bold covers only "nder"; the strike extension must not widen it.
        let document = doc(&[
            ("wo", StyleSet::plain()),
            ("nder", StyleSet::plain().with_strikethrough().with_bold()),
            ("ful", StyleSet::plain()),
        ]);
        assert_eq!(encode(&document, options), "[s]wo[b]nder[/b]ful[/s]");
    }

    #[test]
    fn test_strike_extension_off_by_default() {
        let document = doc(&[
            ("wo", StyleSet::plain()),
            ("nder", StyleSet::plain().with_strikethrough()),
            ("ful", StyleSet::plain()),
        ]);
        assert_eq!(encode_plain(&document), "wo[s]nder[/s]ful");
    }

    #[test]
    fn test_literal_brackets_are_escaped() {
        let document = doc(&[("not [b] a tag", StyleSet::plain())]);
        assert_eq!(encode_plain(&document), "not \\[b\\] a tag");
    }

    #[test]
    fn test_escaping_does_not_touch_generated_tags() {
        let document = doc(&[("[x]", StyleSet::plain().with_bold())]);
        assert_eq!(encode_plain(&document), "[b]\\[x\\][/b]");
    }

    #[test]
    fn test_code_wrapping_does_not_affect_inner_tags() {
        let options = EncoderOptions::builder().enclose_in_code_tags(true).build();
        let document = doc(&[("x", StyleSet::plain().with_italic())]);
        assert_eq!(encode(&document, options), "[code][i]x[/i][/code]");
    }

    #[test]
    fn test_write_to_matches_encode() {
        let document = doc(&[("hey", StyleSet::plain().with_bold())]);
        let encoder = Encoder::new(EncoderOptions::default());
        let mut buffer = Vec::new();
        encoder.write_to(&document, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), encoder.encode(&document));
    }

    #[rstest]
    #[case(vec![("plain", StyleSet::plain())])]
    #[case(vec![("a", StyleSet::plain().with_bold()), ("b", StyleSet::plain().with_italic())])]
    #[case(vec![
        ("a", StyleSet::plain().with_bold().with_underline()),
        ("b", StyleSet::plain().with_underline()),
        ("c", StyleSet::plain().with_bold().with_italic().with_strikethrough()),
    ])]
    #[case(vec![
        ("a", StyleSet::plain().with_link_url("https://example.com").with_bold()),
        ("b", StyleSet::plain().with_text_color(RgbColor::new(9, 9, 9))),
    ])]
    fn test_output_is_always_balanced(#[case] spans: Vec<(&str, StyleSet)>) {
        let document = doc(&spans);
        assert_balanced(&encode_plain(&document));
    }

    #[test]
    fn test_encoder_is_reusable() {
        let encoder = Encoder::new(EncoderOptions::default());
        let bold = doc(&[("a", StyleSet::plain().with_bold())]);
        assert_eq!(encoder.encode(&bold), "[b]a[/b]");
        assert_eq!(encoder.encode(&bold), "[b]a[/b]");
        assert_eq!(encoder.encode(&StyledDocument::new()), "");
    }
}
