// src/config/consts.rs

// Document sentinels
pub const START_MARKER: &str = "<!-- AUTO_REVIEWS_START -->";
pub const END_MARKER: &str = "<!-- AUTO_REVIEWS_END -->";
pub const DEFAULT_DOCUMENT: &str = "pages/reviews.html";

// Row markup (shared by render and parse)
pub const ROW_CLASS: &str = "board__row";
pub const TITLE_CLASS: &str = "linkTitle";
pub const PREVIEW_CLASS: &str = "preview";
pub const LEGACY_TITLE_CLASS: &str = "col-title";
pub const LEGACY_PREVIEW_CLASS: &str = "col-preview";
pub const ATTR_ID: &str = "data-id";
pub const ATTR_DATE: &str = "data-auto-date";
pub const ATTR_CONTENT: &str = "data-content";
pub const ID_PREFIX: &str = "auto-";
pub const RATING_LABEL: &str = "별점";
pub const EDIT_LABEL: &str = "비밀번호";

// Rate policy
pub const DEFAULT_DAILY_CAP: usize = 1;
pub const DEFAULT_TIMEZONE: &str = "Asia/Seoul";

// Drafting
pub const DEFAULT_MAX_ATTEMPTS: usize = 300;
pub const DEFAULT_BODY_CAP: usize = 100;
pub const KEYWORDS_MIN: usize = 2;
pub const KEYWORDS_MAX_EXCLUSIVE: usize = 4; // 2 or 3 keywords
pub const MAX_STARS: u8 = 5;
