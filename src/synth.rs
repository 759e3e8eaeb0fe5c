// src/synth.rs
use rand::{Rng, seq::SliceRandom};

use crate::config::{AppendOptions, WordPools};
use crate::core::sanitize::{normalize_ws, truncate_words};
use crate::entry::mask_author;
use crate::error::{AppendError, AppendResult};
use crate::parse::Existing;

/// Title and body that collide with nothing already on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

pub struct Synthesizer {
    pools: WordPools,
    max_attempts: usize,
    body_cap: usize,
    keyword_count: std::ops::Range<usize>,
}

impl Synthesizer {
    pub fn new(pools: WordPools, options: &AppendOptions) -> AppendResult<Self> {
        pools.validate()?;
        let kc = options.keyword_count.clone();
        if kc.start == 0 || kc.is_empty() {
            return Err(AppendError::Pools(format!(
                "keyword count range {}..{} must be non-empty and start at 1 or more",
                kc.start, kc.end
            )));
        }
        Ok(Self {
            pools,
            max_attempts: options.max_attempts,
            body_cap: options.body_cap,
            keyword_count: kc,
        })
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn draft<R: Rng>(&self, rng: &mut R) -> Option<Draft> {
        let title = normalize_ws(self.pools.titles.choose(rng)?);
        let opener = self.pools.openers.choose(rng)?;
        let closer = self.pools.closers.choose(rng)?;

        let n = rng.gen_range(self.keyword_count.clone());
        let keywords: Vec<&str> = self
            .pools
            .keywords
            .choose_multiple(rng, n)
            .map(String::as_str)
            .collect();
        let note = self.pools.keyword_note.replace("{keywords}", &keywords.join(", "));

        let body = format!("{opener} {closer} {note}");
        let body = truncate_words(&normalize_ws(&body), self.body_cap);
        Some(Draft { title, body })
    }

    /// Draw until a draft misses every title, body and pair in `existing`,
    /// giving up after `max_attempts`.
    pub fn synthesize<R: Rng>(&self, existing: &Existing, rng: &mut R) -> Option<Draft> {
        for attempt in 1..=self.max_attempts {
            let d = self.draft(rng)?;
            if existing.contains(&d.title, &d.body) {
                continue;
            }
            logd!(attempt, title = %d.title, "unique draft found");
            return Some(d);
        }
        None
    }

    /// Masked display name, e.g. `박**`.
    pub fn author<R: Rng>(&self, rng: &mut R) -> String {
        let stem = self.pools.authors.choose(rng).map(String::as_str).unwrap_or("익명");
        mask_author(stem)
    }

    pub fn rating<R: Rng>(&self, rng: &mut R) -> u8 {
        self.pools.ratings.choose(rng).copied().unwrap_or(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn tiny_pools() -> WordPools {
        WordPools {
            titles: vec![s!("Only title")],
            openers: vec![s!("Plain notes,")],
            closers: vec![s!("fine overall.")],
            keywords: vec![s!("k1"), s!("k2")],
            keyword_note: s!("({keywords})"),
            authors: vec![s!("Lee")],
            ratings: vec![4],
        }
    }

    fn opts() -> AppendOptions {
        AppendOptions { keyword_count: 2..3, ..AppendOptions::default() }
    }

    #[test]
    fn draft_uses_pool_shape() {
        let syn = Synthesizer::new(tiny_pools(), &opts()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let d = syn.synthesize(&Existing::default(), &mut rng).unwrap();
        assert_eq!(d.title, "Only title");
        assert!(d.body.starts_with("Plain notes, fine overall. ("));
        assert!(d.body.contains("k1") && d.body.contains("k2"));
        assert_eq!(syn.author(&mut rng), "Lee**");
        assert_eq!(syn.rating(&mut rng), 4);
    }

    #[test]
    fn exhausts_when_every_title_is_taken() {
        let syn = Synthesizer::new(tiny_pools(), &AppendOptions { max_attempts: 25, ..opts() }).unwrap();
        let mut existing = Existing::default();
        existing.insert("Only title", "something else");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(syn.synthesize(&existing, &mut rng), None);
    }

    #[test]
    fn default_pools_draw_distinct_keywords_and_cap_body() {
        let o = AppendOptions { body_cap: 40, ..AppendOptions::default() };
        let syn = Synthesizer::new(WordPools::default(), &o).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let d = syn.synthesize(&Existing::default(), &mut rng).unwrap();
            assert!(d.body.chars().count() <= 40, "{}", d.body);
            assert!(!d.body.ends_with(' '));
        }
    }

    #[test]
    fn keyword_count_must_be_positive() {
        let o = AppendOptions { keyword_count: 0..2, ..AppendOptions::default() };
        assert!(matches!(Synthesizer::new(WordPools::default(), &o), Err(AppendError::Pools(_))));
        let o = AppendOptions { keyword_count: 3..3, ..AppendOptions::default() };
        assert!(Synthesizer::new(WordPools::default(), &o).is_err());
    }

    #[test]
    fn avoids_existing_pairs() {
        let mut pools = tiny_pools();
        pools.titles.push(s!("Second title"));
        pools.closers.push(s!("would return."));
        let syn = Synthesizer::new(pools, &opts()).unwrap();
        let mut existing = Existing::default();
        existing.insert("Only title", "Plain notes, fine overall. (k1, k2)");
        existing.insert("Only title", "Plain notes, fine overall. (k2, k1)");
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let d = syn.synthesize(&existing, &mut rng).unwrap();
            assert_ne!(d.title, "Only title");
            assert!(d.body.contains("would return."));
        }
    }
}
