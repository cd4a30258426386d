//! Styled documents: ordered text fragments with their active styles.

use serde::{Deserialize, Serialize};

use crate::{Run, StyleSet, coalesce_runs};

/// A contiguous text fragment carrying one style.
///
/// Spans are how callers hand rich text to the encoder; they need not be
/// maximal (adjacent spans may share a style) and may be empty. Maximality
/// is established later by run coalescing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub style: StyleSet,
}

impl Span {
    #[must_use]
    pub fn new<S: Into<String>>(text: S, style: StyleSet) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// An ordered sequence of styled spans; logically, a sequence of characters
/// each associated with the owning span's [`StyleSet`].
///
/// Documents are immutable input to the encoder. They are built once by the
/// caller (push spans in document order) and then only read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledDocument {
    pub spans: Vec<Span>,
}

impl StyledDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding a single unstyled fragment.
    #[must_use]
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            spans: vec![Span::new(text, StyleSet::plain())],
        }
    }

    #[must_use]
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Append a styled fragment at the end of the document.
    pub fn push<S: Into<String>>(&mut self, text: S, style: StyleSet) {
        self.spans.push(Span::new(text, style));
    }

    /// `true` when the document holds no characters (empty spans count as
    /// no characters).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|span| span.text.is_empty())
    }

    /// Number of characters in the document.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.spans.iter().map(|span| span.text.chars().count()).sum()
    }

    /// Iterate the document's characters paired with their active style.
    pub fn chars(&self) -> impl Iterator<Item = (char, &StyleSet)> {
        self.spans
            .iter()
            .flat_map(|span| span.text.chars().map(move |ch| (ch, &span.style)))
    }

    /// Segment the document into maximal constant-style runs.
    #[must_use]
    pub fn runs(&self) -> Vec<Run> {
        coalesce_runs(self.chars().map(|(ch, style)| (ch, style.clone())))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_document() {
        assert!(StyledDocument::new().is_empty());
        assert!(StyledDocument::plain("").is_empty());
        assert_eq!(StyledDocument::new().char_len(), 0);
    }

    #[test]
    fn test_chars_cross_span_boundaries() {
        let mut doc = StyledDocument::new();
        doc.push("ab", StyleSet::plain());
        doc.push("c", StyleSet::plain().with_bold());
        let chars: Vec<char> = doc.chars().map(|(ch, _)| ch).collect();
        assert_eq!(chars, vec!['a', 'b', 'c']);
        assert_eq!(doc.char_len(), 3);
    }

    #[test]
    fn test_deserialize_span_without_style() {
        let doc: StyledDocument =
            serde_json::from_str(r#"{"spans": [{"text": "hi"}]}"#).unwrap();
        assert_eq!(doc, StyledDocument::plain("hi"));
    }
}
