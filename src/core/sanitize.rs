// src/core/sanitize.rs

/// Escape for both text nodes and double-quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_html`]. `&amp;` goes last so `&amp;lt;` stays `&lt;`.
pub fn decode_html(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
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

/// Cap `s` at `cap` chars, backing off to the last whitespace so no word is
/// cut. A single word longer than `cap` is hard-cut.
pub fn truncate_words(s: &str, cap: usize) -> String {
    if s.chars().count() <= cap {
        return s.to_string();
    }
    let cut = s.char_indices().nth(cap).map(|(i, _)| i).unwrap_or(s.len());
    let head = &s[..cut];
    let next_is_space = s[cut..].chars().next().is_some_and(char::is_whitespace);
    if next_is_space {
        return head.trim_end().to_string();
    }
    match head.rfind(char::is_whitespace) {
        Some(ws) if !head[..ws].trim().is_empty() => head[..ws].trim_end().to_string(),
        _ => head.to_string(),
    }
}
