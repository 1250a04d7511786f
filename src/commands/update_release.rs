//! `grease update-release REPO TAG`

use super::ReleaseFlags;
use super::assets::{AssetReport, print_upload_summary, upload_assets};
use super::intent::{print_asset_plan, print_dry_run_exit, print_release_intent};
use crate::core::context::RunContext;
use crate::core::error::GreaseResult;
use crate::core::repo::RepoId;
use crate::files::{AssetFile, find_assets};
use crate::github::{ReleaseApi, ReleaseDescriptor};
use crate::utils::validate_positional_count;

/// Validated update-release invocation
#[derive(Debug, Clone)]
pub struct UpdateReleaseRequest {
  pub repo: RepoId,
  /// Tag identifies the release; it is never sent as a change
  pub release: ReleaseDescriptor,
  pub assets: Vec<AssetFile>,
}

impl UpdateReleaseRequest {
  /// Expected positional arguments (2): REPO TAG
  pub fn from_args(args: &[String], flags: &ReleaseFlags) -> GreaseResult<Self> {
    validate_positional_count(args, 2)?;

    let repo = RepoId::parse(&args[0])?;
    let tag = args[1].clone();
    tracing::debug!(owner = %repo.owner, name = %repo.name, %tag, "update-release arguments");

    let assets = find_assets(flags.assets.as_deref())?;

    Ok(Self {
      repo,
      release: flags.descriptor(tag, None),
      assets,
    })
  }
}

/// Run the update-release command
///
/// Any failure to find the release for the tag is fatal, whether GitHub
/// says 404 or the request never completed.
pub fn run_update_release(
  ctx: &RunContext,
  api: &dyn ReleaseApi,
  args: &[String],
  flags: &ReleaseFlags,
) -> GreaseResult<Vec<AssetReport>> {
  let request = UpdateReleaseRequest::from_args(args, flags)?;

  if ctx.show_intent() {
    print_release_intent(
      ctx,
      "Will update release with the following settings...",
      &request.repo,
      &request.release,
    );
    print_asset_plan(&request.assets);
  }

  if ctx.dry_run {
    print_dry_run_exit();
    return Ok(Vec::new());
  }

  let token = ctx.require_token()?;

  let id = api.release_id_by_tag(&request.repo, &request.release.tag_name, token)?;
  let id = api.update_release(&request.repo, id, &request.release, token)?;
  println!("✅ Updated release {} (id: {})", request.release.tag_name, id);

  let reports = upload_assets(api, &request.repo, id, &request.assets, token);
  print_upload_summary(&reports);

  Ok(reports)
}
