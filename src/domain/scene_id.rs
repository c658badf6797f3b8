use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

const SCENE_PREFIX: &str = "MathScene_";
const SOURCE_PREFIX: &str = "temp_";

/// Timestamp-derived name of one render job.
///
/// Two ids minted within the same wall-clock second are equal; callers that
/// need distinct ids must wait for the next second.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneId(String);

impl SceneId {
    pub fn from_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self(format!("{SCENE_PREFIX}{}", at.format("%Y%m%d_%H%M%S")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `temp_<scene>`, the stem the renderer uses for its per-file media folder.
    pub fn source_stem(&self) -> String {
        format!("{SOURCE_PREFIX}{}", self.0)
    }

    pub fn source_file_name(&self) -> String {
        format!("{}.py", self.source_stem())
    }

    pub fn canonical_video_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.mp4", self.0))
    }

    /// Case-insensitive substring match against a file name.
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        file_name
            .to_lowercase()
            .contains(&self.0.to_lowercase())
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
