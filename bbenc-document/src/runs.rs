//! Maximal constant-style runs and the segmentation that produces them.

use crate::StyleSet;

/// A maximal contiguous span of a document where the style is constant.
///
/// Runs produced by [`coalesce_runs`] uphold two invariants: adjacent runs
/// never share a style (they would have been merged), and no run is empty.
/// Together with document order this makes runs a partition of the text,
/// so a tag transition can only occur at a run boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: StyleSet,
}

/// Group consecutive characters with equal styles into maximal runs.
#[must_use]
pub fn coalesce_runs<I>(chars: I) -> Vec<Run>
where
    I: IntoIterator<Item = (char, StyleSet)>,
{
    let mut runs: Vec<Run> = Vec::new();
    for (ch, style) in chars {
        match runs.last_mut() {
            Some(run) if run.style == style => run.text.push(ch),
            Some(_) | None => runs.push(Run {
                text: ch.to_string(),
                style,
            }),
        }
    }
    runs
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::StyledDocument;

    #[test]
    fn test_adjacent_equal_spans_merge() {
        let mut doc = StyledDocument::new();
        doc.push("ab", StyleSet::plain());
        doc.push("cd", StyleSet::plain());
        doc.push("ef", StyleSet::plain().with_bold());
        let runs = doc.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs.first().unwrap().text, "abcd");
        assert_eq!(runs.last().unwrap().text, "ef");
    }

    #[test]
    fn test_empty_spans_produce_no_runs() {
        let mut doc = StyledDocument::new();
        doc.push("", StyleSet::plain().with_bold());
        doc.push("x", StyleSet::plain());
        doc.push("", StyleSet::plain().with_italic());
        let runs = doc.runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs.first().unwrap().text, "x");
    }

    #[test]
    fn test_adjacent_runs_never_share_a_style() {
        let mut doc = StyledDocument::new();
        doc.push("a", StyleSet::plain());
        doc.push("b", StyleSet::plain().with_bold());
        doc.push("c", StyleSet::plain().with_bold());
        doc.push("d", StyleSet::plain());
        let runs = doc.runs();
        for pair in runs.windows(2) {
            if let [left, right] = pair {
                assert_ne!(left.style, right.style);
            }
        }
        assert_eq!(runs.len(), 3);
    }
}
