//! Literal text handling: bracket escaping and tab width.

/// Spaces substituted for each tab when `replace_tabs_with_spaces` is on.
pub(crate) const TAB_WIDTH: usize = 4;

/// Append `text` to `out`, escaping literal brackets.
///
/// `[` and `]` in document text become `\[` and `\]` so a BBCode parser
/// cannot mistake them for markup. Generated tag syntax never goes through
/// this path.
pub(crate) fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '[' => out.push_str("\\["),
            ']' => out.push_str("\\]"),
            _ => out.push(ch),
        }
    }
}
