//! Intent reports printed under `--debug` and `--dry-run`

use crate::core::context::RunContext;
use crate::core::repo::RepoId;
use crate::files::AssetFile;
use crate::github::ReleaseDescriptor;

/// Print the release settings a command is about to send
pub fn print_release_intent(ctx: &RunContext, heading: &str, repo: &RepoId, release: &ReleaseDescriptor) {
  println!("📦 {}", heading);
  println!("  Repo:               {}", repo.html_url());
  println!("  Using token:        {}", ctx.masked_token());
  println!("  Tag:                {}", release.tag_name);
  if let Some(commitish) = &release.target_commitish {
    println!("  Tag Commit:         {}", commitish);
  }
  println!(
    "  Release Name/Title: {}",
    release.name.as_deref().unwrap_or("(not set)")
  );
  println!("  Draft:              {}", release.draft);
  println!("  Pre-release:        {}", release.prerelease);
  println!("-----Begin Release Notes-----");
  println!("{}", release.body.as_deref().unwrap_or(""));
  println!("-----End Release Notes-----");
}

/// Print the target of an upload-only run
pub fn print_upload_intent(ctx: &RunContext, repo: &RepoId, tag: &str) {
  println!("📦 Uploading assets with the following settings...");
  println!("  Repo:               {}", repo.html_url());
  println!("  Using token:        {}", ctx.masked_token());
  println!("  Tag:                {}", tag);
}

/// Print each asset and the name it will be uploaded as
pub fn print_asset_plan(assets: &[AssetFile]) {
  if assets.is_empty() {
    println!("No assets found to upload");
    return;
  }

  println!("The following assets will be uploaded:");
  for asset in assets {
    println!("\t{} as {}", asset.path.display(), asset.name);
  }
}

/// Closing line of a dry run
pub fn print_dry_run_exit() {
  println!("🔍 Dry run specified. Exiting.");
}
