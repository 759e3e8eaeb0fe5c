// src/runner.rs
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::{
    config::{AppendOptions, WordPools},
    document::{load_document, locate_region, save, splice},
    entry::{Entry, make_id, render_row},
    error::{AppendError, AppendResult},
    parse::{DayTags, count_today_entries, extract_existing, parse_rows},
    synth::Synthesizer,
};

/// What a successful run wrote.
#[derive(Clone, Debug)]
pub struct Appended {
    pub path: PathBuf,
    pub entry: Entry,
}

/// Load → check cap → draft → render → splice → save.
pub struct Appender {
    options: AppendOptions,
    synth: Synthesizer,
}

impl Appender {
    pub fn new(options: AppendOptions, pools: WordPools) -> AppendResult<Self> {
        let synth = Synthesizer::new(pools, &options)?;
        Ok(Self { options, synth })
    }

    pub fn options(&self) -> &AppendOptions {
        &self.options
    }

    /// One scheduled run against `path`. Any `Err` leaves the file as it was;
    /// [`AppendError::is_skip`] tells the quiet outcomes from real failures.
    pub fn run<R: Rng>(&self, path: &Path, now: DateTime<Utc>, rng: &mut R) -> AppendResult<Appended> {
        let text = load_document(path)?;
        let (updated, entry) = self.append_to_text(&text, now, rng)?;
        save(path, &updated)?;
        logf!(id = %entry.id, path = %path.display(), "review appended");
        Ok(Appended { path: path.to_path_buf(), entry })
    }

    /// The in-memory half of [`run`](Self::run).
    pub fn append_to_text<R: Rng>(
        &self,
        text: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> AppendResult<(String, Entry)> {
        let region = locate_region(text)?;
        let block = region.slice(text);

        let stamp = self.options.zone.stamp(now);
        let today = DayTags {
            date_tag: self.options.date_format.tag(&stamp),
            compact: stamp.compact_date(),
        };

        let count = count_today_entries(block, &today);
        logd!(count, cap = self.options.daily_cap, day = %today.date_tag, "today's entries");
        if count >= self.options.daily_cap {
            return Err(AppendError::CapReached { count, cap: self.options.daily_cap });
        }

        let existing = extract_existing(block);
        let draft = self
            .synth
            .synthesize(&existing, rng)
            .ok_or(AppendError::NoUniqueDraftFound { attempts: self.synth.max_attempts() })?;

        let taken: HashSet<String> = parse_rows(block).into_iter().filter_map(|r| r.id).collect();
        let mut id = make_id(&today.compact, &stamp.hhmm(), rng.r#gen());
        while taken.contains(&id) {
            id = make_id(&today.compact, &stamp.hhmm(), rng.r#gen());
        }

        let entry = Entry {
            id,
            date_tag: today.date_tag,
            title: draft.title,
            body: draft.body,
            author: self.synth.author(rng),
            rating: self.synth.rating(rng),
            timestamp: stamp.display(),
        };

        let updated = splice(text, region, &render_row(&entry));
        Ok((updated, entry))
    }
}
