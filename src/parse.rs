// src/parse.rs
//
// Reads rows back out of the review region. Uses the same class and
// attribute names `entry::render_row` writes, so whatever we render is
// recognized on the next run.

use std::collections::HashSet;

use crate::config::consts::*;
use crate::core::html::{attr_value, open_tag, tag_blocks_ci, text_after_class};
use crate::core::sanitize::{decode_html, normalize_ws};

/// A row as found in the document. Text is decoded, whitespace collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedRow {
    pub id: Option<String>,
    pub date_tag: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// De-duplication sets built from existing rows.
#[derive(Clone, Debug, Default)]
pub struct Existing {
    pub pairs: HashSet<(String, String)>,
    pub titles: HashSet<String>,
    pub bodies: HashSet<String>,
}

impl Existing {
    pub fn contains(&self, title: &str, body: &str) -> bool {
        self.titles.contains(title)
            || self.bodies.contains(body)
            || self.pairs.contains(&(title.to_string(), body.to_string()))
    }

    pub fn insert(&mut self, title: &str, body: &str) {
        if !title.is_empty() { self.titles.insert(title.to_string()); }
        if !body.is_empty() { self.bodies.insert(body.to_string()); }
        if !title.is_empty() && !body.is_empty() {
            self.pairs.insert((title.to_string(), body.to_string()));
        }
    }
}

/// The two ways a calendar day shows up on a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayTags {
    /// Value expected in `data-auto-date`.
    pub date_tag: String,
    /// `YYYYMMDD`, as embedded in the id.
    pub compact: String,
}

impl DayTags {
    fn id_prefix(&self) -> String {
        join!(ID_PREFIX, &self.compact, "-")
    }
}

fn clean(raw: &str) -> Option<String> {
    let s = normalize_ws(&decode_html(raw));
    if s.is_empty() { None } else { Some(s) }
}

fn parse_row(block: &str) -> ParsedRow {
    let tag = open_tag(block);

    let title = text_after_class(block, TITLE_CLASS)
        .or_else(|| text_after_class(block, LEGACY_TITLE_CLASS))
        .and_then(clean);

    // The attribute carries the untruncated body; preview cells are a fallback.
    let body = attr_value(tag, ATTR_CONTENT)
        .and_then(clean)
        .or_else(|| text_after_class(block, PREVIEW_CLASS).and_then(clean))
        .or_else(|| text_after_class(block, LEGACY_PREVIEW_CLASS).and_then(clean));

    ParsedRow {
        id: attr_value(tag, ATTR_ID).and_then(clean),
        date_tag: attr_value(tag, ATTR_DATE).and_then(clean),
        title,
        body,
    }
}

/// Every `<tr>` in the region, in document order.
pub fn parse_rows(region: &str) -> Vec<ParsedRow> {
    tag_blocks_ci(region, "<tr", "</tr>")
        .into_iter()
        .map(parse_row)
        .collect()
}

pub fn extract_existing(region: &str) -> Existing {
    let mut existing = Existing::default();
    for row in parse_rows(region) {
        existing.insert(
            row.title.as_deref().unwrap_or(""),
            row.body.as_deref().unwrap_or(""),
        );
    }
    existing
}

/// Rows stamped with `today`, by date attribute or by id prefix.
pub fn count_today_entries(region: &str, today: &DayTags) -> usize {
    let prefix = today.id_prefix();
    parse_rows(region)
        .iter()
        .filter(|r| {
            r.date_tag.as_deref() == Some(today.date_tag.as_str())
                || r.id.as_deref().is_some_and(|id| id.starts_with(&prefix))
        })
        .count()
}
