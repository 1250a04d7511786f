//! `grease upload-assets REPO TAG GLOB_PATTERN`

use super::assets::{AssetReport, print_upload_summary, upload_assets};
use super::intent::{print_asset_plan, print_dry_run_exit, print_upload_intent};
use crate::core::context::RunContext;
use crate::core::error::GreaseResult;
use crate::core::repo::RepoId;
use crate::files::{AssetFile, find_assets};
use crate::github::ReleaseApi;
use crate::utils::validate_positional_count;

/// Validated upload-assets invocation
#[derive(Debug, Clone)]
pub struct UploadAssetsRequest {
  pub repo: RepoId,
  pub tag: String,
  pub assets: Vec<AssetFile>,
}

impl UploadAssetsRequest {
  /// Expected positional arguments (3): REPO TAG GLOB_PATTERN
  pub fn from_args(args: &[String]) -> GreaseResult<Self> {
    validate_positional_count(args, 3)?;

    let repo = RepoId::parse(&args[0])?;
    let tag = args[1].clone();
    let pattern = args[2].as_str();
    tracing::debug!(owner = %repo.owner, name = %repo.name, %tag, pattern, "upload-assets arguments");

    let assets = find_assets(Some(pattern))?;

    Ok(Self { repo, tag, assets })
  }
}

/// Run the upload-assets command
pub fn run_upload_assets(ctx: &RunContext, api: &dyn ReleaseApi, args: &[String]) -> GreaseResult<Vec<AssetReport>> {
  let request = UploadAssetsRequest::from_args(args)?;

  if ctx.show_intent() {
    print_upload_intent(ctx, &request.repo, &request.tag);
    print_asset_plan(&request.assets);
  }

  if ctx.dry_run {
    print_dry_run_exit();
    return Ok(Vec::new());
  }

  let token = ctx.require_token()?;

  let id = api.release_id_by_tag(&request.repo, &request.tag, token)?;
  tracing::debug!(%id, tag = %request.tag, "found release");

  let reports = upload_assets(api, &request.repo, id, &request.assets, token);
  print_upload_summary(&reports);

  Ok(reports)
}
