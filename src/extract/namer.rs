// src/extract/namer.rs
//! Friendly-name inference from text near a match.
//!
//! Best effort only. A miss is `None`, never an error; the extractor then
//! falls back to the pattern's generic label.

use std::ops::Range;

use regex::Regex;

use crate::core::sanitize::normalize_ws;

/// Byte range covering `radius` chars before `span.start` through `radius`
/// chars after `span.end`, clamped to `text`.
pub fn window(text: &str, span: Range<usize>, radius: usize) -> Range<usize> {
    let start = if radius == 0 {
        span.start
    } else {
        text[..span.start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map_or(0, |(i, _)| i)
    };
    let end = text[span.end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| span.end + i);
    start..end
}

/// First hit of `secondary` in the window around `span`.
pub fn infer_name(text: &str, span: Range<usize>, radius: usize, secondary: &Regex) -> Option<String> {
    let ctx = &text[window(text, span, radius)];
    let name = normalize_ws(secondary.find(ctx)?.as_str());
    (!name.is_empty()).then_some(name)
}
