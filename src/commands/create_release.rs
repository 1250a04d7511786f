//! `grease create-release REPO TAG COMMITISH`

use super::ReleaseFlags;
use super::assets::{AssetReport, print_upload_summary, upload_assets};
use super::intent::{print_asset_plan, print_dry_run_exit, print_release_intent};
use crate::core::context::RunContext;
use crate::core::error::GreaseResult;
use crate::core::repo::RepoId;
use crate::files::{AssetFile, find_assets};
use crate::github::{ReleaseApi, ReleaseDescriptor};
use crate::utils::validate_positional_count;

/// Validated create-release invocation
#[derive(Debug, Clone)]
pub struct CreateReleaseRequest {
  pub repo: RepoId,
  pub release: ReleaseDescriptor,
  pub assets: Vec<AssetFile>,
}

impl CreateReleaseRequest {
  /// Expected positional arguments (3): REPO TAG COMMITISH
  pub fn from_args(args: &[String], flags: &ReleaseFlags) -> GreaseResult<Self> {
    validate_positional_count(args, 3)?;

    let repo = RepoId::parse(&args[0])?;
    let tag = args[1].clone();
    let commitish = args[2].clone();
    tracing::debug!(owner = %repo.owner, name = %repo.name, %tag, %commitish, "create-release arguments");

    let assets = find_assets(flags.assets.as_deref())?;

    Ok(Self {
      repo,
      release: flags.descriptor(tag, Some(commitish)),
      assets,
    })
  }
}

/// Run the create-release command
pub fn run_create_release(
  ctx: &RunContext,
  api: &dyn ReleaseApi,
  args: &[String],
  flags: &ReleaseFlags,
) -> GreaseResult<Vec<AssetReport>> {
  let request = CreateReleaseRequest::from_args(args, flags)?;

  if ctx.show_intent() {
    print_release_intent(
      ctx,
      "Will create release with the following settings...",
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

  let id = api.create_release(&request.repo, &request.release, token)?;
  println!("✅ Created release {} (id: {})", request.release.tag_name, id);

  let reports = upload_assets(api, &request.repo, id, &request.assets, token);
  print_upload_summary(&reports);

  Ok(reports)
}
