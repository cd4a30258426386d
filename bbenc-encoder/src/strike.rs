//! Whole-word extension of strikethrough spans.

use bbenc_document::StyleSet;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Extend strikethrough to whole words.
///
/// A word is a maximal run of alphanumeric characters; whitespace,
/// punctuation, and symbols are boundaries. Any word containing at least
/// one struck character becomes struck in full, which is equivalent to
/// pushing each strike span's edge outward to the nearest word boundary
/// whenever the edge falls mid-word. Only the strikethrough attribute is
/// touched; characters outside words keep their own flag.
pub(crate) fn extend_strike_to_words(
    chars: Vec<(char, StyleSet)>,
) -> Vec<(char, StyleSet)> {
    let mut out = Vec::with_capacity(chars.len());
    let mut word: Vec<(char, StyleSet)> = Vec::new();
    for (ch, style) in chars {
        if is_word_char(ch) {
            word.push((ch, style));
        } else {
            flush_word(&mut out, &mut word);
            out.push((ch, style));
        }
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut Vec<(char, StyleSet)>, word: &mut Vec<(char, StyleSet)>) {
    let struck = word.iter().any(|(_, style)| style.strikethrough);
    for (ch, mut style) in word.drain(..) {
        if struck {
            style.strikethrough = true;
        }
        out.push((ch, style));
    }
}
