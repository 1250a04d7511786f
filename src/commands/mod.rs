//! CLI commands for grease
//!
//! ## Releases
//! - **create_release**: Create a release for a tag, then upload assets
//! - **update_release**: Edit the release for a tag, then upload assets
//! - **upload_assets**: Upload assets to the release for a tag
//!
//! ## Troubleshooting
//! - **list_files**: Show what a glob pattern matches
//!
//! Every command validates its positionals, resolves assets, reports intent,
//! and stops there on `--dry-run`. Remote work goes through `&dyn ReleaseApi`.

pub mod assets;
pub mod create_release;
pub mod intent;
pub mod list_files;
pub mod update_release;
pub mod upload_assets;

#[cfg(test)]
pub(crate) mod testing;

pub use create_release::run_create_release;
pub use list_files::run_list_files;
pub use update_release::run_update_release;
pub use upload_assets::run_upload_assets;

use crate::github::ReleaseDescriptor;

/// Release flags shared by create-release and update-release
#[derive(Debug, Clone, Default)]
pub struct ReleaseFlags {
  /// Release title
  pub name: Option<String>,
  /// Release body
  pub notes: Option<String>,
  pub draft: bool,
  pub pre_release: bool,
  /// Glob pattern of assets to upload
  pub assets: Option<String>,
}

impl ReleaseFlags {
  /// Build the descriptor for `tag` from these flags
  pub fn descriptor(&self, tag: String, target_commitish: Option<String>) -> ReleaseDescriptor {
    ReleaseDescriptor {
      tag_name: tag,
      target_commitish,
      name: self.name.clone(),
      body: self.notes.clone(),
      draft: self.draft,
      prerelease: self.pre_release,
    }
  }
}
