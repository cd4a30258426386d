//! Styled-text document model.
//!
//! This crate provides the data types shared by the encoder and any caller
//! that supplies rich text:
//!
//! - [`StyledDocument`] / [`Span`] - an ordered sequence of text fragments,
//!   each carrying the [`StyleSet`] active over its characters
//! - [`StyleSet`] - the fixed set of style attributes (bold, italic,
//!   underline, strikethrough, colors, font, link)
//! - [`RgbColor`] - exact 8-bit-per-channel color values
//! - [`Run`] / [`coalesce_runs`] - maximal constant-style segmentation
//!
//! All model types are serde-serializable so documents can cross a process
//! boundary as JSON. The model is read-only input to the encoder: nothing
//! here mutates a document after construction.

mod color;
mod document;
mod runs;
mod style;

pub use color::{ParseColorError, RgbColor};
pub use document::{Span, StyledDocument};
pub use runs::{Run, coalesce_runs};
pub use style::StyleSet;
