use super::*;

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "lookbook_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn whitelists_are_case_insensitive() {
    assert!(is_image_file(Path::new("a/b/photo.JPG")));
    assert!(is_image_file(Path::new("x.webp")));
    assert!(is_image_file(Path::new("x.jpeg")));
    assert!(!is_image_file(Path::new("x.gif")));
    assert!(!is_image_file(Path::new(".png")));
    assert!(!is_image_file(Path::new("png")));

    assert!(is_sound_file(Path::new("track.MP3")));
    assert!(is_sound_file(Path::new("track.wav")));
    assert!(!is_sound_file(Path::new("track.flac")));
}

#[test]
fn list_files_skips_directories_and_sorts() {
    let tmp = temp_dir("list_files");
    std::fs::create_dir_all(tmp.join("nested")).unwrap();
    std::fs::write(tmp.join("b.png"), b"x").unwrap();
    std::fs::write(tmp.join("a.txt"), b"x").unwrap();

    let names = list_files(&tmp).unwrap();
    assert_eq!(names, vec!["a.txt".to_owned(), "b.png".to_owned()]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn list_files_on_missing_dir_fails() {
    assert!(list_files(Path::new("/no/such/lookbook/dir")).is_err());
}
