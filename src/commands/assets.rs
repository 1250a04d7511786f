//! Best-effort asset upload loop
//!
//! Assets are uploaded one at a time, in glob order. A file that cannot be
//! opened, or whose upload fails, is reported and skipped; the loop always
//! runs to the end. The caller gets one [`AssetReport`] per asset and decides
//! nothing from it: exit status depends only on the primary API calls.

use crate::core::error::GreaseError;
use crate::core::repo::RepoId;
use crate::files::AssetFile;
use crate::github::{ReleaseApi, ReleaseId};
use crate::ui::progress::UploadProgress;
use std::fs::File;

/// What happened to one asset
#[derive(Debug)]
pub enum AssetOutcome {
  Uploaded,
  /// Never reached the network (missing, unreadable, not a regular file)
  OpenFailed,
  /// GitHub rejected it or the transfer broke
  UploadFailed { error: GreaseError },
}

/// One asset and its outcome
#[derive(Debug)]
pub struct AssetReport {
  pub asset: AssetFile,
  pub outcome: AssetOutcome,
}

impl AssetReport {
  pub fn is_uploaded(&self) -> bool {
    matches!(self.outcome, AssetOutcome::Uploaded)
  }
}

/// Upload every asset to release `id`, printing one line per asset
pub fn upload_assets(
  api: &dyn ReleaseApi,
  repo: &RepoId,
  id: ReleaseId,
  assets: &[AssetFile],
  token: &str,
) -> Vec<AssetReport> {
  let mut progress = UploadProgress::for_assets(assets.len());
  let mut reports = Vec::with_capacity(assets.len());

  for asset in assets {
    let outcome = upload_one(api, repo, id, asset, token);

    match &outcome {
      AssetOutcome::Uploaded => println!("   Uploaded {}", asset.name),
      AssetOutcome::OpenFailed => println!("⚠️  Failed to open {}. Skipping.", asset.path.display()),
      AssetOutcome::UploadFailed { error } => {
        println!("❌ Error while uploading asset at {}: {}", asset.name, error);
      }
    }

    if let Some(p) = progress.as_mut() {
      p.inc();
    }

    reports.push(AssetReport {
      asset: asset.clone(),
      outcome,
    });
  }

  reports
}

/// "Uploaded N of M assets", or nothing when there was nothing to upload
///
/// Counts only: each failed asset already got its own line.
pub fn upload_summary(reports: &[AssetReport]) -> Option<String> {
  if reports.is_empty() {
    return None;
  }

  let uploaded = reports.iter().filter(|r| r.is_uploaded()).count();
  let marker = if uploaded == reports.len() { "✅" } else { "⚠️ " };
  Some(format!("{} Uploaded {} of {} assets", marker, uploaded, reports.len()))
}

pub fn print_upload_summary(reports: &[AssetReport]) {
  if let Some(line) = upload_summary(reports) {
    println!("{}", line);
  }
}

fn upload_one(api: &dyn ReleaseApi, repo: &RepoId, id: ReleaseId, asset: &AssetFile, token: &str) -> AssetOutcome {
  let Ok(file) = File::open(&asset.path) else {
    return AssetOutcome::OpenFailed;
  };

  let size = match file.metadata() {
    Ok(meta) if meta.is_file() => meta.len(),
    _ => return AssetOutcome::OpenFailed,
  };

  tracing::debug!(path = %asset.path.display(), name = %asset.name, size, "uploading asset");

  // The handle moves into the request and is closed when the attempt ends
  match api.upload_asset(repo, id, file, size, &asset.name, token) {
    Ok(()) => AssetOutcome::Uploaded,
    Err(error) => AssetOutcome::UploadFailed { error },
  }
}
