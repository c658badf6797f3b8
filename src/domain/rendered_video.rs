use std::path::PathBuf;

use super::SceneId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedVideo {
    pub scene_id: SceneId,
    pub path: PathBuf,
}

impl RenderedVideo {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Relative URL under which the video is served.
    pub fn public_url(&self) -> String {
        format!("/videos/{}", self.file_name())
    }
}
