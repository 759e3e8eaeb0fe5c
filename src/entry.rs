// src/entry.rs
use crate::config::consts::*;
use crate::core::sanitize::escape_html;

/// One generated review, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    /// Calendar-day tag in the configured [`DateTagFormat`](crate::config::DateTagFormat).
    pub date_tag: String,
    pub title: String,
    pub body: String,
    /// Already masked, e.g. `김**`.
    pub author: String,
    pub rating: u8,
    /// `YYYY-MM-DD HH:MM` in the configured zone.
    pub timestamp: String,
}

/// `auto-YYYYMMDD-HHMM-xxxxxx`
pub fn make_id(compact_date: &str, hhmm: &str, nonce: u32) -> String {
    let hex = format!("{:06x}", nonce & 0x00ff_ffff);
    join!(ID_PREFIX, compact_date, "-", hhmm, "-", &hex)
}

pub fn mask_author(stem: &str) -> String {
    join!(stem, "**")
}

pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS) as usize;
    let mut out = "★".repeat(filled);
    out.push_str(&"☆".repeat(MAX_STARS as usize - filled));
    out
}

/// Serialize an entry as one `board__row` table row.
///
/// Visible text and the `data-content` attribute are escaped separately; the
/// page script reads the attribute to open the detail view.
pub fn render_row(entry: &Entry) -> String {
    let id = escape_html(&entry.id);
    let date = escape_html(&entry.date_tag);
    let title = escape_html(&entry.title);
    let body = escape_html(&entry.body);
    let content_attr = escape_html(&entry.body);
    let author = escape_html(&entry.author);
    let time = escape_html(&entry.timestamp);
    let stars = stars(entry.rating);

    format!(
        r#"
<tr class="{ROW_CLASS}" data-auto="1" {ATTR_DATE}="{date}" {ATTR_CONTENT}="{content_attr}" {ATTR_ID}="{id}">
  <td class="cell-title">
    <button class="{TITLE_CLASS}" data-open="{id}" type="button">{title}</button>
    <div class="{PREVIEW_CLASS}">{body}</div>
  </td>
  <td class="cell-author">{author}</td>
  <td class="cell-time">{time}</td>
  <td class="cell-rate"><span aria-label="{RATING_LABEL}" class="stars">{stars}</span></td>
  <td class="cell-pass"><button class="miniBtn" data-edit="{id}" type="button">{EDIT_LABEL}</button></td>
</tr>"#
    )
}
