// src/clock.rs
//
// "Now" is always read through a configured zone, never the host's local
// time, so the daily cap follows one civil calendar wherever the job runs.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::config::consts::DEFAULT_TIMEZONE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// IANA zone from the tz database, e.g. `Asia/Seoul`.
    Named(Tz),
    /// Plain offset from UTC, no DST rules.
    Fixed(FixedOffset),
}

impl Default for Zone {
    fn default() -> Self {
        Zone::from_name(DEFAULT_TIMEZONE).unwrap_or(Zone::Named(chrono_tz::Asia::Seoul))
    }
}

impl Zone {
    pub fn from_name(name: &str) -> Option<Self> {
        name.trim().parse::<Tz>().ok().map(Zone::Named)
    }

    /// Accepts `+09:00`, `+0900`, `-05:30`.
    pub fn from_offset(offset: &str) -> Option<Self> {
        offset.trim().parse::<FixedOffset>().ok().map(Zone::Fixed)
    }

    pub fn stamp(&self, now: DateTime<Utc>) -> LocalStamp {
        let local = match self {
            Zone::Named(tz) => now.with_timezone(tz).naive_local(),
            Zone::Fixed(off) => now.with_timezone(off).naive_local(),
        };
        LocalStamp { local }
    }
}

/// Wall-clock time in the configured zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalStamp {
    local: NaiveDateTime,
}

impl LocalStamp {
    pub fn date(&self) -> NaiveDate {
        self.local.date()
    }

    /// `YYYYMMDD`, the form embedded in entry ids.
    pub fn compact_date(&self) -> String {
        self.local.format("%Y%m%d").to_string()
    }

    pub fn hhmm(&self) -> String {
        self.local.format("%H%M").to_string()
    }

    /// `YYYY-MM-DD HH:MM`, shown in the time cell.
    pub fn display(&self) -> String {
        self.local.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seoul_rolls_the_day_before_utc() {
        // 2024-04-30 16:30 UTC is already 2024-05-01 01:30 in Seoul.
        let now = Utc.with_ymd_and_hms(2024, 4, 30, 16, 30, 0).unwrap();
        let st = Zone::default().stamp(now);
        assert_eq!(st.compact_date(), "20240501");
        assert_eq!(st.display(), "2024-05-01 01:30");
        assert_eq!(st.hhmm(), "0130");
    }

    #[test]
    fn fixed_offset_matches_named_zone_without_dst() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 3, 0, 0).unwrap();
        let fixed = Zone::from_offset("+09:00").unwrap();
        assert_eq!(fixed.stamp(now), Zone::default().stamp(now));
    }

    #[test]
    fn named_zone_follows_dst() {
        let ny = Zone::from_name("America/New_York").unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(ny.stamp(winter).display(), "2024-01-15 07:00");
        assert_eq!(ny.stamp(summer).display(), "2024-07-15 08:00");
    }

    #[test]
    fn rejects_unknown_zone() {
        assert!(Zone::from_name("Mars/Olympus").is_none());
        assert!(Zone::from_offset("nine").is_none());
    }
}
