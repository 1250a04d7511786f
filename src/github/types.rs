//! GitHub release API payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Desired state of a release
///
/// Serialized as the body of `POST /repos/{owner}/{repo}/releases`.
/// Optional fields left as `None` are omitted so GitHub keeps its defaults.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescriptor {
  pub tag_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub target_commitish: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  pub draft: bool,
  pub prerelease: bool,
}

impl ReleaseDescriptor {
  /// Fields sent when editing an existing release.
  ///
  /// Tag and commitish cannot change after creation, so they are left out.
  pub fn update_body(&self) -> UpdateReleaseBody<'_> {
    UpdateReleaseBody {
      name: self.name.as_deref(),
      body: self.body.as_deref(),
      draft: self.draft,
      prerelease: self.prerelease,
    }
  }
}

/// Body of `PATCH /repos/{owner}/{repo}/releases/{id}`
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct UpdateReleaseBody<'a> {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<&'a str>,
  pub draft: bool,
  pub prerelease: bool,
}

/// Identifier GitHub assigns to a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseId(pub(crate) u64);

impl fmt::Display for ReleaseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// The parts of a release response grease reads
#[derive(Deserialize, Debug, Clone)]
pub struct ReleaseResponse {
  pub id: u64,
  #[serde(default)]
  pub html_url: Option<String>,
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorBody {
  pub message: String,
}
