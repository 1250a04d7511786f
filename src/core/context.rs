//! Run context - build once, pass everywhere
//!
//! # Design
//!
//! `RunContext` holds everything an invocation knows before a command starts:
//! the global flags, the GitHub endpoints and the token. It is folded together
//! from CLI flags and their environment fallbacks in main.rs and handed to
//! the command by reference. Nothing mutates it afterwards.
//!
//! ```text
//! main.rs:
//!   RunContext::new(..) -> &RunContext
//!   |
//!   v
//! commands/create_release.rs, update_release.rs, etc:
//!   fn run_*(ctx: &RunContext, api: &dyn ReleaseApi, ..)
//! ```

use crate::core::error::{GreaseError, GreaseResult};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_UPLOADS_URL: &str = "https://uploads.github.com";

/// GitHub endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
  /// REST API base (release metadata)
  pub api_url: String,
  /// Upload API base (asset bytes)
  pub uploads_url: String,
}

impl ApiSettings {
  pub fn new(api_url: impl Into<String>, uploads_url: impl Into<String>) -> Self {
    Self {
      api_url: api_url.into().trim_end_matches('/').to_string(),
      uploads_url: uploads_url.into().trim_end_matches('/').to_string(),
    }
  }
}

impl Default for ApiSettings {
  fn default() -> Self {
    Self::new(DEFAULT_API_URL, DEFAULT_UPLOADS_URL)
  }
}

/// Immutable per-invocation configuration.
#[derive(Debug, Clone)]
pub struct RunContext {
  /// Print resolved values and intents
  pub debug: bool,

  /// Report intent only, never touch the remote service
  pub dry_run: bool,

  /// Where to send requests
  pub api: ApiSettings,

  /// GitHub token (`--github-token` / `GITHUB_TOKEN`)
  /// Empty strings are treated as absent
  token: Option<String>,
}

impl RunContext {
  pub fn new(debug: bool, dry_run: bool, api: ApiSettings, token: Option<String>) -> Self {
    Self {
      debug,
      dry_run,
      api,
      token: token.filter(|t| !t.is_empty()),
    }
  }

  /// Whether the intent report should be printed before executing
  pub fn show_intent(&self) -> bool {
    self.debug || self.dry_run
  }

  /// Get the token or error if it was not supplied.
  ///
  /// Commands call this after the dry-run check and before the first request.
  pub fn require_token(&self) -> GreaseResult<&str> {
    self
      .token
      .as_deref()
      .ok_or_else(|| GreaseError::missing_argument("--github-token"))
  }

  /// Token for display: first four characters, rest masked
  pub fn masked_token(&self) -> String {
    match &self.token {
      None => "(none)".to_string(),
      Some(token) => {
        let visible: String = token.chars().take(4).collect();
        format!("{}{}", visible, "*".repeat(token.chars().count().saturating_sub(4).min(16)))
      }
    }
  }
}
