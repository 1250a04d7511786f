//! Repository identifiers (`owner/name`)

use crate::core::error::{GreaseError, GreaseResult};
use std::fmt;
use std::str::FromStr;

/// A GitHub repository, identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
  pub owner: String,
  pub name: String,
}

impl RepoId {
  /// Parse an `owner/name` string, splitting at the first `/`.
  ///
  /// Everything after the first `/` is the name, unmodified. No character-set
  /// validation is done; GitHub rejects bad names itself.
  pub fn parse(value: &str) -> GreaseResult<Self> {
    let Some((owner, name)) = value.split_once('/') else {
      return Err(GreaseError::bad_argument(
        "REPO",
        "expected to be of the form owner/repo but found no /",
      ));
    };

    if owner.is_empty() {
      return Err(GreaseError::bad_argument(
        "REPO",
        "expected to be of the form owner/repo but owner portion was blank",
      ));
    }

    if name.is_empty() {
      return Err(GreaseError::bad_argument(
        "REPO",
        "expected to be of the form owner/repo but repo portion was blank",
      ));
    }

    Ok(Self {
      owner: owner.to_string(),
      name: name.to_string(),
    })
  }

  /// Browser URL of the repository (used in intent reports)
  pub fn html_url(&self) -> String {
    format!("https://github.com/{}/{}", self.owner, self.name)
  }
}

impl FromStr for RepoId {
  type Err = GreaseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for RepoId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.owner, self.name)
  }
}
