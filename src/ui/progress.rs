//! Progress indicators for asset uploads
//!
//! Uses `linya` for allocation-free progress bars drawn on stderr, so they
//! never mix with the per-asset lines printed on stdout.

use linya::{Bar, Progress};

/// Progress bar over the assets of one upload loop
pub struct UploadProgress {
  progress: Progress,
  bar: Bar,
}

impl UploadProgress {
  /// Create a progress bar for `total` assets
  pub fn new(total: usize, label: impl Into<String>) -> Self {
    let mut progress = Progress::new();
    let bar = progress.bar(total, label.into());
    Self { progress, bar }
  }

  /// Only worth drawing when there is more than one asset
  pub fn for_assets(total: usize) -> Option<Self> {
    (total > 1).then(|| Self::new(total, format!("Uploading {} assets", total)))
  }

  /// Increment progress by 1
  pub fn inc(&mut self) {
    self.progress.inc_and_draw(&self.bar, 1);
  }
}
