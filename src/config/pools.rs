// src/config/pools.rs
use std::{fs, path::Path};

use serde::Deserialize;

use super::consts::{KEYWORDS_MIN, MAX_STARS};
use crate::error::{AppendError, AppendResult};

/// Candidate text the synthesizer draws from. Read-only once built.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordPools {
    pub titles: Vec<String>,
    /// First half of the body sentence.
    pub openers: Vec<String>,
    /// Second half of the body sentence.
    pub closers: Vec<String>,
    pub keywords: Vec<String>,
    /// Appended after the body; `{keywords}` is replaced by the drawn list.
    #[serde(default = "default_keyword_note")]
    pub keyword_note: String,
    /// Surname stems, masked on render (`김` -> `김**`).
    pub authors: Vec<String>,
    /// Star counts drawn uniformly; repeat a value to weight it.
    pub ratings: Vec<u8>,
}

fn default_keyword_note() -> String {
    s!("({keywords} 참고)")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for WordPools {
    fn default() -> Self {
        Self {
            titles: strings(&[
                "분위기 깔끔해서 만족했어요",
                "가볍게 즐기기 좋았어요",
                "처음인데도 부담 없었어요",
                "정리 잘 된 가이드 느낌",
                "친구들이랑 무난하게 다녀옴",
                "응대가 차분해서 좋았어요",
                "정보가 깔끔해서 참고하기 좋음",
                "후기 보고 선택했는데 만족",
            ]),
            openers: strings(&[
                "정리 방식이 깔끔해서",
                "정보가 과하지 않아서",
                "동선 설명이 이해하기 쉬워서",
                "처음 이용하는 입장에서도",
                "후기 내용이 담백해서",
            ]),
            closers: strings(&[
                "부담 없이 참고하기 좋았습니다.",
                "전체적으로 무난했어요.",
                "시간 낭비 없이 도움 됐어요.",
                "가볍게 보기 괜찮았습니다.",
                "다음에도 참고할 것 같아요.",
            ]),
            keywords: strings(&[
                "제주 여행",
                "제주 맛집",
                "제주 카페",
                "제주 일정",
                "제주 동선",
                "서귀포 여행",
                "서귀포 맛집",
                "서귀포 카페",
                "서귀포 일정",
                "서귀포 산책",
            ]),
            keyword_note: default_keyword_note(),
            authors: strings(&["김", "이", "박", "최", "정", "윤", "장"]),
            ratings: vec![5, 4, 4, 5, 3],
        }
    }
}

impl WordPools {
    /// Load pools from a TOML file. Every list is required; `keyword_note`
    /// falls back to the built-in note.
    pub fn from_toml_file(path: &Path) -> AppendResult<Self> {
        let text = fs::read_to_string(path)?;
        let pools: WordPools = toml::from_str(&text)
            .map_err(|e| AppendError::Pools(format!("{}: {e}", path.display())))?;
        pools.validate()?;
        Ok(pools)
    }

    pub fn validate(&self) -> AppendResult<()> {
        let lists: [(&str, usize); 6] = [
            ("titles", self.titles.len()),
            ("openers", self.openers.len()),
            ("closers", self.closers.len()),
            ("keywords", self.keywords.len()),
            ("authors", self.authors.len()),
            ("ratings", self.ratings.len()),
        ];
        for (name, len) in lists {
            if len == 0 {
                return Err(AppendError::Pools(format!("{name} is empty")));
            }
        }
        if self.keywords.len() < KEYWORDS_MIN {
            return Err(AppendError::Pools(format!(
                "need at least {KEYWORDS_MIN} keywords, got {}",
                self.keywords.len()
            )));
        }
        if let Some(bad) = self.ratings.iter().find(|r| !(1..=MAX_STARS).contains(*r)) {
            return Err(AppendError::Pools(format!("rating {bad} outside 1..={MAX_STARS}")));
        }
        Ok(())
    }
}
