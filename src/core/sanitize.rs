// src/core/sanitize.rs

/// Decode the HTML entities that show up in reference pages.
/// Named: the common handful. Numeric: decimal and hex. Unknown ones pass through.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // entity bodies are short
        let semi = tail.char_indices().take(12).find(|&(_, c)| c == ';').map(|(i, _)| i);
        match semi.and_then(|i| decode_one(&tail[1..i]).map(|c| (c, i))) {
            Some((ch, i)) => {
                out.push(ch);
                rest = &tail[i + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    let ch = match body {
        "nbsp" => ' ',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "ndash" => '–',
        "mdash" => '—',
        "plus" => '+',
        "comma" => ',',
        _ => return None,
    };
    Some(ch)
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Collapse whitespace inside each line and drop blank lines.
pub fn normalize_lines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for line in s.lines() {
        let line = normalize_ws(line);
        if line.is_empty() { continue; }
        if !out.is_empty() { out.push('\n'); }
        out.push_str(&line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric() {
        assert_eq!(decode_entities("Galaxy&nbsp;S21 &amp; S21+"), "Galaxy S21 & S21+");
        assert_eq!(decode_entities("iPhone14&#44;2"), "iPhone14,2");
        assert_eq!(decode_entities("SM&#x2D;G991B"), "SM-G991B");
    }

    #[test]
    fn leaves_bare_ampersands() {
        assert_eq!(decode_entities("AT&T & co"), "AT&T & co");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
    }

    #[test]
    fn lines_are_collapsed() {
        assert_eq!(normalize_lines("  a \t b \n\n \n c  "), "a b\nc");
    }
}
