use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::LookbookResult;

/// Still-image extensions accepted for composition (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "webp"];

/// Background music extensions (compared case-insensitively).
pub const SOUND_EXTENSIONS: &[&str] = &["wav", "mp3"];

pub fn is_image_file(path: &Path) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

pub fn is_sound_file(path: &Path) -> bool {
    has_extension(path, SOUND_EXTENSIONS)
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// Names of the regular files directly inside `dir`, sorted. Sub-directories are not entered.
pub fn list_files(dir: &Path) -> LookbookResult<Vec<String>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry of '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::debug!(name = ?raw, "skipping non UTF-8 file name"),
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/discover.rs"]
mod tests;
