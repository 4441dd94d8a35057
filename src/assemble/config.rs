use std::path::{Path, PathBuf};

use crate::foundation::error::{LookbookError, LookbookResult};

/// Static image stamped over the whole video at a fixed pixel offset.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WatermarkConfig {
    pub path: Option<PathBuf>,
    pub x: i64,
    pub y: i64,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            path: None,
            x: -1,
            y: -1,
        }
    }
}

impl WatermarkConfig {
    pub fn new(path: impl Into<PathBuf>, x: i64, y: i64) -> Self {
        Self {
            path: Some(path.into()),
            x,
            y,
        }
    }

    /// The watermark file, when it is set, non-empty and both offsets are non-negative.
    pub fn active_path(&self) -> Option<&Path> {
        let path = self.path.as_deref()?;
        if path.as_os_str().is_empty() || self.x < 0 || self.y < 0 {
            return None;
        }
        Some(path)
    }
}

/// Per-batch music options; the music directory itself is chosen per call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MusicConfig {
    pub fadeout_sec: f64,
    /// Derive each image's duration from the track length instead of the fixed duration.
    pub fit_duration_to_music: bool,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            fadeout_sec: 4.0,
            fit_duration_to_music: false,
        }
    }
}

impl MusicConfig {
    pub fn validate(&self) -> LookbookResult<()> {
        if !self.fadeout_sec.is_finite() || self.fadeout_sec < 0.0 {
            return Err(LookbookError::validation(format!(
                "fadeout must be a non-negative number of seconds, got {}",
                self.fadeout_sec
            )));
        }
        Ok(())
    }
}
