use std::path::PathBuf;

/// Phase of a batch the progress snapshot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building one clip per image.
    Compose,
    /// Rendering and encoding frames.
    Encode,
}

/// A snapshot of batch progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressInfo {
    pub stage: Stage,
    /// Items (images or frames) finished so far.
    pub current: u64,
    pub total: u64,
    /// Image just handled, during [`Stage::Compose`].
    pub item: Option<PathBuf>,
}

/// Receiver for progress updates.
///
/// Callbacks observe but cannot halt a batch.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, info: &ProgressInfo);
}

/// Discards every notification; the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _info: &ProgressInfo) {}
}
