mod ask_question;
mod download_video;
pub mod error;
mod generate_video;
mod health;
mod serve_video;
mod test_manim;
mod upload;
mod video_file;

pub use ask_question::{AskQuestionRequest, AskQuestionResponse, ask_question_handler};
pub use download_video::download_video_handler;
pub use error::ErrorResponse;
pub use generate_video::{GenerateVideoRequest, GenerateVideoResponse, generate_video_handler};
pub use health::{HealthResponse, health_handler};
pub use serve_video::serve_video_handler;
pub use test_manim::{RendererCheckResponse, test_manim_handler};
pub use upload::{UploadResponse, upload_handler};
pub use video_file::{download_name_for, is_traversal};
