//! GitHub release API access
//!
//! - **types**: request/response payloads (`ReleaseDescriptor`, `ReleaseId`)
//! - **client**: `GitHubClient`, the blocking HTTP implementation
//!
//! Commands only see the [`ReleaseApi`] trait, so they can be driven by any
//! implementation (the real client, or a recording double in tests).

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{ReleaseDescriptor, ReleaseId};

use crate::core::error::GreaseResult;
use crate::core::repo::RepoId;
use std::fs::File;

/// The four remote operations grease performs
///
/// Each call is a single synchronous round trip authenticated with `token`.
/// Nothing is retried.
pub trait ReleaseApi {
  /// Find the release attached to `tag`
  fn release_id_by_tag(&self, repo: &RepoId, tag: &str, token: &str) -> GreaseResult<ReleaseId>;

  /// Create a release from the full descriptor
  fn create_release(&self, repo: &RepoId, release: &ReleaseDescriptor, token: &str) -> GreaseResult<ReleaseId>;

  /// Edit name, notes, draft and pre-release of an existing release
  fn update_release(
    &self,
    repo: &RepoId,
    id: ReleaseId,
    release: &ReleaseDescriptor,
    token: &str,
  ) -> GreaseResult<ReleaseId>;

  /// Stream `file` (`size` bytes) as an asset named `name`
  fn upload_asset(
    &self,
    repo: &RepoId,
    id: ReleaseId,
    file: File,
    size: u64,
    name: &str,
    token: &str,
  ) -> GreaseResult<()>;
}
