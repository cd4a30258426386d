//! The open-tag stack and run-boundary transition computation.

use crate::tags::Tag;

/// Explicit stack of currently-open tags.
///
/// Every open pushes and every close pops, so closes always come out in
/// reverse-open order and the emitted markup is well nested: an outer tag
/// is never closed while an inner one is still open.
#[derive(Debug, Default)]
pub(crate) struct TagStack {
    open: Vec<Tag>,
}

impl TagStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Transition the open set to `want`, appending close then open text.
    ///
    /// The longest stack prefix whose tags are all wanted stays open (the
    /// minimality rule: a tag shared by adjacent runs is not re-emitted).
    /// Everything above that prefix closes top-down; this includes a wanted
    /// tag stacked above a closing one, which then reopens - stack
    /// discipline wins over minimality when the two conflict. Remaining
    /// wanted tags open in the order given, which upstream is canonical
    /// order.
    pub(crate) fn transition(&mut self, want: &[Tag], out: &mut String) {
        let keep = self
            .open
            .iter()
            .take_while(|tag| want.contains(tag))
            .count();
        while self.open.len() > keep {
            if let Some(tag) = self.open.pop() {
                out.push_str(&tag.close_text());
            }
        }
        for tag in want {
            if !self.open.contains(tag) {
                out.push_str(&tag.open_text());
                self.open.push(tag.clone());
            }
        }
    }

    /// Close every remaining open tag, innermost first.
    pub(crate) fn close_all(&mut self, out: &mut String) {
        while let Some(tag) = self.open.pop() {
            out.push_str(&tag.close_text());
        }
    }
}
