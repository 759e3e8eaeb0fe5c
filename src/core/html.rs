// src/core/html.rs
//
// Just enough tag scanning to read back the rows we write. Not a general
// HTML parser: attribute values are expected in double quotes.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// All `open ... close` blocks in `s`, case-insensitive on the tag names.
/// `open` is a prefix such as `"<tr"`; the block runs to the end of `close`.
pub fn tag_blocks_ci<'a>(s: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    // ASCII-only lowering keeps byte offsets aligned with `s`.
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);

    let mut out = Vec::new();
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&ol) {
        let start = from + rel;
        let after = start + ol.len();
        // `<tr` must not match `<track`
        match lc[after..].chars().next() {
            Some(c) if c == '>' || c.is_whitespace() => {}
            _ => {
                from = after;
                continue;
            }
        }
        let Some(end_rel) = lc[after..].find(&cl) else { break };
        let end = after + end_rel + cl.len();
        out.push(&s[start..end]);
        from = end;
    }
    out
}

/// The opening tag of a block, up to and including the first `>`.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

/// Raw (still escaped) value of `name="..."` inside an opening tag.
pub fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = join!(name, "=\"");
    let mut from = 0;
    while let Some(rel) = tag[from..].find(&needle) {
        let at = from + rel;
        let boundary = tag[..at].chars().next_back().is_some_and(char::is_whitespace);
        let vstart = at + needle.len();
        if boundary {
            let vlen = tag[vstart..].find('"')?;
            return Some(&tag[vstart..vstart + vlen]);
        }
        from = vstart;
    }
    None
}

/// Text between the element carrying `class="{class}"` and the next tag.
pub fn text_after_class<'a>(block: &'a str, class: &str) -> Option<&'a str> {
    let needle = join!("class=\"", class, "\"");
    let at = block.find(&needle)?;
    let gt = block[at..].find('>')? + at + 1;
    let lt = block[gt..].find('<')? + gt;
    Some(&block[gt..lt])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_rows_case_insensitive_and_skips_lookalikes() {
        let html = r#"<track src="a"></track><TR id="1"><td>a</td></TR> <tr class="x"><td>b</td></tr>"#;
        let rows = tag_blocks_ci(html, "<tr", "</tr>");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("<TR id=\"1\">"));
        assert!(rows[1].ends_with("</tr>"));
    }

    #[test]
    fn attr_value_needs_a_boundary() {
        let tag = r#"<tr data-auto="1" data-auto-date="2024-05-01" data-id="auto-1">"#;
        assert_eq!(attr_value(tag, "data-auto"), Some("1"));
        assert_eq!(attr_value(tag, "data-auto-date"), Some("2024-05-01"));
        assert_eq!(attr_value(tag, "id"), None);
        assert_eq!(attr_value(tag, "data-id"), Some("auto-1"));
    }

    #[test]
    fn text_after_class_reads_first_text_node() {
        let block = r#"<td><button class="linkTitle" data-open="x" type="button">Hello &amp; bye</button></td>"#;
        assert_eq!(text_after_class(block, "linkTitle"), Some("Hello &amp; bye"));
        assert_eq!(text_after_class(block, "preview"), None);
    }
}
