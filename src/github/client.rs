//! Blocking GitHub REST client built on `ureq`

use super::types::{ApiErrorBody, ReleaseDescriptor, ReleaseId, ReleaseResponse};
use super::ReleaseApi;
use crate::core::context::ApiSettings;
use crate::core::error::{GreaseResult, RemoteError};
use crate::core::repo::RepoId;
use std::fs::File;

/// Accept header pinning the v3 REST API
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Client for the release endpoints of the GitHub API
pub struct GitHubClient {
  agent: ureq::Agent,
  settings: ApiSettings,
}

impl GitHubClient {
  pub fn new(settings: ApiSettings) -> Self {
    let agent = ureq::AgentBuilder::new()
      .user_agent(&format!("grease/{}", env!("CARGO_PKG_VERSION")))
      .build();
    Self { agent, settings }
  }

  /// `{api}/repos/{owner}/{name}/releases{suffix}`
  fn releases_url(&self, repo: &RepoId, suffix: &str) -> String {
    format!(
      "{}/repos/{}/{}/releases{}",
      self.settings.api_url,
      urlencoding::encode(&repo.owner),
      urlencoding::encode(&repo.name),
      suffix
    )
  }

  /// `{uploads}/repos/{owner}/{name}/releases/{id}/assets`
  fn assets_url(&self, repo: &RepoId, id: ReleaseId) -> String {
    format!(
      "{}/repos/{}/{}/releases/{}/assets",
      self.settings.uploads_url,
      urlencoding::encode(&repo.owner),
      urlencoding::encode(&repo.name),
      id
    )
  }

  fn request(&self, method: &str, url: &str, token: &str) -> ureq::Request {
    tracing::debug!(method, url, "GitHub API request");
    self
      .agent
      .request(method, url)
      .set("Accept", GITHUB_ACCEPT)
      .set("Authorization", &format!("Bearer {}", token))
  }
}

impl ReleaseApi for GitHubClient {
  fn release_id_by_tag(&self, repo: &RepoId, tag: &str, token: &str) -> GreaseResult<ReleaseId> {
    let url = self.releases_url(repo, &format!("/tags/{}", urlencoding::encode(tag)));
    let response = self.request("GET", &url, token).call().map_err(remote_error)?;
    read_release(response)
  }

  fn create_release(&self, repo: &RepoId, release: &ReleaseDescriptor, token: &str) -> GreaseResult<ReleaseId> {
    let url = self.releases_url(repo, "");
    let response = self
      .request("POST", &url, token)
      .send_json(release)
      .map_err(remote_error)?;
    read_release(response)
  }

  fn update_release(
    &self,
    repo: &RepoId,
    id: ReleaseId,
    release: &ReleaseDescriptor,
    token: &str,
  ) -> GreaseResult<ReleaseId> {
    let url = self.releases_url(repo, &format!("/{}", id));
    let response = self
      .request("PATCH", &url, token)
      .send_json(release.update_body())
      .map_err(remote_error)?;
    read_release(response)
  }

  fn upload_asset(
    &self,
    repo: &RepoId,
    id: ReleaseId,
    file: File,
    size: u64,
    name: &str,
    token: &str,
  ) -> GreaseResult<()> {
    let url = self.assets_url(repo, id);
    self
      .request("POST", &url, token)
      .query("name", name)
      .set("Content-Type", "application/octet-stream")
      .set("Content-Length", &size.to_string())
      .send(file)
      .map_err(remote_error)?;
    Ok(())
  }
}

/// Turn a `ureq` failure into a `RemoteError`, keeping GitHub's own message
fn remote_error(err: ureq::Error) -> RemoteError {
  match err {
    ureq::Error::Status(status, response) => {
      let body = response.into_string().unwrap_or_default();
      let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "no response body".to_string(),
        Err(_) => body.trim().to_string(),
      };
      RemoteError::Status { status, message }
    }
    ureq::Error::Transport(transport) => RemoteError::Transport {
      message: transport.to_string(),
    },
  }
}

fn read_release(response: ureq::Response) -> GreaseResult<ReleaseId> {
  let release: ReleaseResponse = response.into_json().map_err(|e| RemoteError::Decode {
    message: e.to_string(),
  })?;
  tracing::debug!(id = release.id, html_url = ?release.html_url, "GitHub release");
  Ok(ReleaseId(release.id))
}
