mod concept;
mod document;
mod rendered_video;
mod scene_id;
mod session_state;
mod storage_path;

pub use concept::{Complexity, ConceptKind, ConceptRecord};
pub use document::ContentType;
pub use rendered_video::RenderedVideo;
pub use scene_id::SceneId;
pub use session_state::{CurrentVideo, SessionDocument, SessionId, SessionState};
pub use storage_path::{StoragePath, secure_filename};
