// src/config/options.rs
use std::ops::Range;

use clap::ValueEnum;

use super::consts::*;
use crate::clock::{LocalStamp, Zone};

/// How the calendar day is written into `data-auto-date`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DateTagFormat {
    /// `YYYYMMDD`
    Compact,
    /// `YYYY-MM-DD`
    #[default]
    Dashed,
}

impl DateTagFormat {
    pub fn tag(&self, stamp: &LocalStamp) -> String {
        let pattern = match self {
            DateTagFormat::Compact => "%Y%m%d",
            DateTagFormat::Dashed => "%Y-%m-%d",
        };
        stamp.date().format(pattern).to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppendOptions {
    pub daily_cap: usize,
    pub date_format: DateTagFormat,
    pub zone: Zone,
    pub max_attempts: usize,
    pub body_cap: usize,           // chars, cut on a word boundary
    pub keyword_count: Range<usize>, // half-open, drawn uniformly
}

impl Default for AppendOptions {
    fn default() -> Self {
        Self {
            daily_cap: DEFAULT_DAILY_CAP,
            date_format: DateTagFormat::default(),
            zone: Zone::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            body_cap: DEFAULT_BODY_CAP,
            keyword_count: KEYWORDS_MIN..KEYWORDS_MAX_EXCLUSIVE,
        }
    }
}
