//! Destination file naming.

use crate::Caption;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Default character budget for the caption part of a file name.
pub const DEFAULT_SANITIZED_LENGTH: usize = 50;

static FORBIDDEN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r#"[\\/*?:"<>|]"#).expect("valid regex"));
static WHITESPACE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\s+").expect("valid regex"));

/// Makes text safe to embed in a file name.
///
/// Drops path separators and shell-hostile characters, turns whitespace runs into
/// `_`, and keeps at most `max_length` characters.
///
/// # Examples
///
/// ```
/// use easel_core::sanitize_filename;
///
/// assert_eq!(sanitize_filename("a/b: c?  d", 50), "ab_c_d");
/// assert_eq!(sanitize_filename("abcdef", 3), "abc");
/// ```
pub fn sanitize_filename(text: &str, max_length: usize) -> String {
    let stripped = FORBIDDEN.replace_all(text, "");
    let joined = WHITESPACE.replace_all(&stripped, "_");
    joined.chars().take(max_length).collect()
}

/// How the materialized image is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum FileNaming {
    /// `{YYYYmmdd_HHMMSS}_{sanitized caption}.jpg`
    #[display("timestamped")]
    Timestamped,
    /// `{uuid}.jpg`
    #[display("random")]
    Random,
}

impl FileNaming {
    /// File name for a run that starts now.
    pub fn file_name(&self, caption: &Caption) -> String {
        self.file_name_at(caption, Local::now().naive_local())
    }

    /// File name for a run started at `now`.
    ///
    /// Two timestamped runs in the same second with the same caption collide.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use easel_core::{Caption, FileNaming};
    ///
    /// let at = NaiveDate::from_ymd_opt(2025, 3, 9)
    ///     .unwrap()
    ///     .and_hms_opt(14, 5, 7)
    ///     .unwrap();
    /// let name = FileNaming::Timestamped.file_name_at(&Caption::new("A fox"), at);
    /// assert_eq!(name, "20250309_140507_A_fox.jpg");
    /// ```
    pub fn file_name_at(&self, caption: &Caption, now: NaiveDateTime) -> String {
        match self {
            Self::Timestamped => format!(
                "{}_{}.jpg",
                now.format("%Y%m%d_%H%M%S"),
                sanitize_filename(caption.text(), DEFAULT_SANITIZED_LENGTH)
            ),
            Self::Random => format!("{}.jpg", uuid::Uuid::new_v4().simple()),
        }
    }
}
