//! BBCode encoder for styled-text documents.
//!
//! Walks a [`StyledDocument`](bbenc_document::StyledDocument), segments it
//! into maximal constant-style runs, and emits a minimal, well-nested
//! BBCode tag stream reproducing the styling.
//!
//! # Example
//!
//! ```
//! use bbenc_document::{StyleSet, StyledDocument};
//! use bbenc_encoder::{Encoder, EncoderOptions};
//!
//! let mut doc = StyledDocument::new();
//! doc.push("plain ", StyleSet::plain());
//! doc.push("bold", StyleSet::plain().with_bold());
//!
//! let encoder = Encoder::new(EncoderOptions::default());
//! assert_eq!(encoder.encode(&doc), "plain [b]bold[/b]");
//! ```
//!
//! # Guarantees
//!
//! - Every open tag is closed, in reverse-open (stack) order
//! - A tag shared by adjacent runs is not closed and reopened at their
//!   boundary unless nesting forces it (a closing tag sits beneath it)
//! - Tags opened at the same boundary nest in a fixed canonical order
//!   (`url` outermost, then `font`, `size`, `color`, `bgcolor`, `b`, `i`,
//!   `u`, `s`), so output is deterministic for a given document
//! - Literal `[` and `]` in document text are escaped as `\[` and `\]`
//!
//! Encoding is pure and total: any well-formed document encodes without
//! error, an empty document yields an empty string (or `[code][/code]`
//! when wrapping is enabled). Only [`Encoder::write_to`] can fail, and
//! only on I/O.

mod encoder;
mod error;
mod options;
mod stack;
mod strike;
mod tags;
mod text;

pub use encoder::{Encoder, encode};
pub use error::Error;
pub use options::{EncoderOptions, EncoderOptionsBuilder};
