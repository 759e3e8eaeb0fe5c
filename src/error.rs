// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything a run can stop on.
///
/// The first four variants are ordinary outcomes of a scheduled run and leave
/// the document untouched; see [`AppendError::is_skip`].
#[derive(Debug, Error)]
pub enum AppendError {
    /// Target document does not exist.
    #[error("document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Start/end sentinels absent or out of order.
    #[error("review markers missing or out of order")]
    MarkersMissing,

    /// Today's quota is already on the page.
    #[error("daily cap reached ({count}/{cap})")]
    CapReached { count: usize, cap: usize },

    /// Every draft collided with an existing title, body or pair.
    #[error("no unique draft after {attempts} attempts")]
    NoUniqueDraftFound { attempts: usize },

    /// Word pools failed validation or could not be loaded.
    #[error("word pools: {0}")]
    Pools(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppendError {
    /// True for the "nothing to do this run" outcomes.
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            AppendError::NotFound(_)
                | AppendError::MarkersMissing
                | AppendError::CapReached { .. }
                | AppendError::NoUniqueDraftFound { .. }
        )
    }
}

pub type AppendResult<T> = Result<T, AppendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_variants_are_flagged() {
        assert!(AppendError::NotFound(PathBuf::from("x.html")).is_skip());
        assert!(AppendError::MarkersMissing.is_skip());
        assert!(AppendError::CapReached { count: 1, cap: 1 }.is_skip());
        assert!(AppendError::NoUniqueDraftFound { attempts: 300 }.is_skip());
        assert!(!AppendError::Pools("empty titles".into()).is_skip());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!AppendError::from(io).is_skip());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            AppendError::CapReached { count: 2, cap: 2 }.to_string(),
            "daily cap reached (2/2)"
        );
        assert_eq!(
            AppendError::NoUniqueDraftFound { attempts: 5 }.to_string(),
            "no unique draft after 5 attempts"
        );
    }
}
