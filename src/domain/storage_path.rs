use std::fmt;

use chrono::{DateTime, TimeZone};

/// Location of an uploaded document relative to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// `<YYYYMMDD_HHMMSS>_<secure filename>`, so re-uploads never overwrite.
    pub fn for_upload<Tz: TimeZone>(uploaded_at: &DateTime<Tz>, filename: &str) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(format!(
            "{}_{}",
            uploaded_at.format("%Y%m%d_%H%M%S"),
            secure_filename(filename)
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduces a client-supplied name to `[A-Za-z0-9._-]`, keeping only the final
/// path component. Falls back to `upload.pdf` when nothing survives.
pub fn secure_filename(filename: &str) -> String {
    let last_component = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let mut cleaned = String::with_capacity(last_component.len());
    for ch in last_component.chars() {
        if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
            cleaned.push(ch);
        } else if ch.is_whitespace() {
            cleaned.push('_');
        }
    }

    let trimmed = cleaned.trim_start_matches(['.', '_']).to_string();
    if trimmed.is_empty() {
        "upload.pdf".to_string()
    } else {
        trimmed
    }
}
