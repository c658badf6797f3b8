use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use walkdir::WalkDir;

use crate::domain::SceneId;

const VIDEO_EXTENSION: &str = "mp4";
const VIDEOS_DIR: &str = "videos";
const RESOLUTION_DIRS: [&str; 4] = ["1080p60", "720p30", "480p15", "854x480p30"];
const SCENE_RESOLUTION_DIRS: [&str; 3] = ["1080p60", "720p30", "480p15"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCandidate {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl VideoCandidate {
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Finds the renderer's output for a scene. The renderer decides the exact
/// folder layout, so a fixed set of plausible folders is scanned for
/// recently written videos.
#[derive(Debug, Clone)]
pub struct OutputLocator {
    output_dir: PathBuf,
    recent_window: Duration,
}

impl OutputLocator {
    pub fn new(output_dir: PathBuf, recent_window: Duration) -> Self {
        Self {
            output_dir,
            recent_window,
        }
    }

    pub fn search_directories(&self, scene: &SceneId) -> Vec<PathBuf> {
        let videos = self.output_dir.join(VIDEOS_DIR);
        let scene_videos = self.output_dir.join(scene.source_stem()).join(VIDEOS_DIR);

        let mut directories = vec![self.output_dir.clone(), videos.clone()];
        directories.extend(RESOLUTION_DIRS.iter().map(|r| videos.join(r)));
        directories.push(scene_videos.clone());
        directories.extend(SCENE_RESOLUTION_DIRS.iter().map(|r| scene_videos.join(r)));
        directories
    }

    /// Every video under the search directories modified within the recency
    /// window of `now`, deduplicated, newest first.
    pub fn recent_candidates(&self, scene: &SceneId, now: SystemTime) -> Vec<VideoCandidate> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for directory in self.search_directories(scene) {
            if !directory.is_dir() {
                continue;
            }
            tracing::debug!(directory = %directory.display(), "Searching for rendered video");

            for entry in WalkDir::new(&directory).into_iter().filter_map(Result::ok) {
                let path = entry.path();
                if !entry.file_type().is_file() || !has_video_extension(path) {
                    continue;
                }
                if !seen.insert(path.to_path_buf()) {
                    continue;
                }

                let modified = match entry.metadata().ok().and_then(|m| m.modified().ok()) {
                    Some(modified) => modified,
                    None => continue,
                };
                let age = now.duration_since(modified).unwrap_or(Duration::ZERO);

                if age < self.recent_window {
                    tracing::debug!(path = %path.display(), age_secs = age.as_secs_f32(), "Found recent video");
                    candidates.push(VideoCandidate {
                        path: path.to_path_buf(),
                        modified,
                    });
                }
            }
        }

        candidates.sort_by(|a, b| b.modified.cmp(&a.modified));
        candidates
    }

    pub fn locate(&self, scene: &SceneId) -> Option<VideoCandidate> {
        let candidates = self.recent_candidates(scene, SystemTime::now());
        tracing::info!(count = candidates.len(), "Recent video files found");
        select_candidate(&candidates, scene).cloned()
    }
}

/// Prefers a candidate named after the scene; otherwise the newest one.
/// `candidates` must be sorted newest first.
pub fn select_candidate<'a>(
    candidates: &'a [VideoCandidate],
    scene: &SceneId,
) -> Option<&'a VideoCandidate> {
    candidates
        .iter()
        .find(|c| scene.matches_file_name(&c.file_name()))
        .or_else(|| candidates.first())
}

fn has_video_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(VIDEO_EXTENSION))
}
