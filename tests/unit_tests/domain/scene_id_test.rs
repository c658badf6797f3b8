use std::path::Path;

use chrono::{TimeZone, Utc};
use mathcast::domain::SceneId;

fn sample_scene() -> SceneId {
    let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
    SceneId::from_timestamp(&at)
}

#[test]
fn given_timestamp_when_building_scene_id_then_uses_second_resolution_name() {
    assert_eq!(sample_scene().as_str(), "MathScene_20240307_090502");
}

#[test]
fn given_scene_when_deriving_paths_then_source_and_video_follow_naming() {
    let scene = sample_scene();

    assert_eq!(scene.source_file_name(), "temp_MathScene_20240307_090502.py");
    assert_eq!(
        scene.canonical_video_path(Path::new("videos")),
        Path::new("videos/MathScene_20240307_090502.mp4")
    );
}

#[test]
fn given_file_name_with_scene_in_other_case_when_matching_then_matches() {
    let scene = sample_scene();

    assert!(scene.matches_file_name("mathscene_20240307_090502.mp4"));
    assert!(!scene.matches_file_name("MathScene_20240307_090503.mp4"));
}
