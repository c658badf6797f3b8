use chrono::{TimeZone, Utc};
use mathcast::domain::{StoragePath, secure_filename};

#[test]
fn given_plain_name_when_securing_then_keeps_it() {
    assert_eq!(secure_filename("lecture-01.pdf"), "lecture-01.pdf");
}

#[test]
fn given_directory_components_when_securing_then_keeps_only_file_name() {
    assert_eq!(secure_filename("../../etc/passwd.pdf"), "passwd.pdf");
    assert_eq!(secure_filename("C:\\docs\\notes.pdf"), "notes.pdf");
}

#[test]
fn given_spaces_and_symbols_when_securing_then_replaces_or_drops_them() {
    assert_eq!(secure_filename("my notes (v2).pdf"), "my_notes_v2.pdf");
}

#[test]
fn given_only_unsafe_characters_when_securing_then_falls_back_to_default() {
    assert_eq!(secure_filename("..."), "upload.pdf");
    assert_eq!(secure_filename("✓✓"), "upload.pdf");
}

#[test]
fn given_upload_time_when_building_storage_path_then_prefixes_timestamp() {
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let path = StoragePath::for_upload(&at, "calc notes.pdf");

    assert_eq!(path.as_str(), "20240102_030405_calc_notes.pdf");
}
