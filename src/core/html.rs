// src/core/html.rs
//! Markup → flat text.
//!
//! Structure is thrown away on purpose: extraction only looks at a text
//! stream. Block-level elements end a line so neighbouring table cells and
//! headings don't fuse into one token (`SM-G991B</td><td>SM-G991U` must stay
//! two identifiers). Every other tag boundary becomes a space, so inline
//! siblings (`<span>SM-G991B</span><span>SM-G991U</span>`) stay apart too.

use super::sanitize::{decode_entities, normalize_lines};

const SKIP_CONTENT: &[&str] = &["script", "style", "template", "noscript"];

const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "caption", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "option", "p", "pre", "section", "table", "tbody", "td",
    "tfoot", "th", "thead", "title", "tr", "ul",
];

/// ASCII-lowercase; byte offsets stay valid against the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Plain text of a document, one block per line, entities decoded.
pub fn to_text(markup: &str) -> String {
    let lc = to_lower(markup);
    let mut out = String::with_capacity(markup.len() / 2);
    let mut pos = 0usize;

    while let Some(rel) = markup[pos..].find('<') {
        let lt = pos + rel;
        out.push_str(&decode_entities(&markup[pos..lt]));

        if lc[lt..].starts_with("<!--") {
            pos = match lc[lt + 4..].find("-->") {
                Some(end) => lt + 4 + end + 3,
                None => markup.len(),
            };
            continue;
        }

        let Some(gt_rel) = markup[lt..].find('>') else {
            // unterminated tag: keep the rest as text
            pos = lt;
            break;
        };
        let gt = lt + gt_rel;
        let (name, closing) = tag_name(&lc[lt + 1..gt]);
        pos = gt + 1;

        if !closing && SKIP_CONTENT.contains(&name) {
            let close = format!("</{name}");
            pos = match lc[pos..].find(&close) {
                Some(c) => {
                    let c = pos + c;
                    lc[c..].find('>').map_or(markup.len(), |g| c + g + 1)
                }
                None => markup.len(),
            };
            continue;
        }
        if BLOCK.contains(&name) {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out.push_str(&decode_entities(&markup[pos..]));

    normalize_lines(&out)
}

/// `"/TD class=x"` → ("td", true). Comments/doctype yield an empty name.
fn tag_name(inner: &str) -> (&str, bool) {
    let (closing, rest) = match inner.strip_prefix('/') {
        Some(r) => (true, r),
        None => (false, inner),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    (&rest[..end], closing)
}
