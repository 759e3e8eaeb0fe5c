// src/document.rs
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::config::consts::{END_MARKER, START_MARKER};
use crate::error::{AppendError, AppendResult};

/// Byte range strictly between the two sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Just past the start marker.
    pub start: usize,
    /// Where the end marker begins.
    pub end: usize,
}

impl Region {
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

pub fn load_document(path: &Path) -> AppendResult<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AppendError::NotFound(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}

/// First start marker, first end marker; the end must follow the start.
pub fn locate_region(text: &str) -> AppendResult<Region> {
    let s = text.find(START_MARKER).ok_or(AppendError::MarkersMissing)?;
    let e = text.find(END_MARKER).ok_or(AppendError::MarkersMissing)?;
    let start = s + START_MARKER.len();
    if e < start {
        return Err(AppendError::MarkersMissing);
    }
    Ok(Region { start, end: e })
}

/// Insert `fragment` right after the start marker (newest first).
pub fn splice(text: &str, region: Region, fragment: &str) -> String {
    let mut out = String::with_capacity(text.len() + fragment.len());
    out.push_str(&text[..region.start]);
    out.push_str(fragment);
    out.push_str(&text[region.start..]);
    out
}

/// Whole-file replace via a sibling temp file and rename, keeping the
/// original file's permissions.
pub fn save(path: &Path, text: &str) -> AppendResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
