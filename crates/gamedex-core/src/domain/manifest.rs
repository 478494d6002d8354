//! Manifest domain types.
//!
//! These types mirror the JSON manifest format one-to-one. Every field is
//! tolerant of absence (`#[serde(default)]`) so a sparse manifest decodes to
//! zero values instead of failing the whole file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire date format used by `uploadDate` fields.
pub const UPLOAD_DATE_FORMAT: &str = "%Y-%m-%d";

/// One downloadable package as described by a manifest entry.
///
/// Immutable once loaded. `upload_date` and `file_size` are kept as the raw
/// strings the manifest carried; malformed dates and free-form size labels
/// are legal values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    /// Human-readable package title.
    #[serde(default)]
    pub title: String,
    /// Download locations, in manifest order. Displayed, never fetched.
    #[serde(default)]
    pub uris: Vec<String>,
    /// Upload date in `YYYY-MM-DD` form, or any malformed string.
    #[serde(default, rename = "uploadDate")]
    pub upload_date: String,
    /// Human-formatted size label (e.g. "1.2 GB"), not a byte count.
    #[serde(default, rename = "fileSize")]
    pub file_size: String,
}

impl DownloadRecord {
    /// Parse `upload_date` as a calendar date, `None` when malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.upload_date, UPLOAD_DATE_FORMAT).ok()
    }

    /// Render the upload date as `DD.MM.YYYY`, falling back to the raw
    /// manifest string when it does not parse.
    pub fn display_date(&self) -> String {
        self.parsed_date().map_or_else(
            || self.upload_date.clone(),
            |date| date.format("%d.%m.%Y").to_string(),
        )
    }
}

/// The named group of download records originating from one manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection name; defaults to the source file's stem when the
    /// manifest omits it.
    #[serde(default)]
    pub name: String,
    /// Records in manifest order.
    #[serde(default, rename = "downloads")]
    pub records: Vec<DownloadRecord>,
}
