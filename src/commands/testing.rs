//! Recording `ReleaseApi` double for command tests

use crate::core::error::{GreaseResult, RemoteError};
use crate::core::repo::RepoId;
use crate::github::{ReleaseApi, ReleaseDescriptor, ReleaseId};
use std::cell::RefCell;
use std::fs::File;
use std::io::Read;

/// A call made against the double, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  Lookup { repo: String, tag: String },
  Create { repo: String, release: ReleaseDescriptor },
  Update { id: u64, release: ReleaseDescriptor },
  Upload { id: u64, name: String, bytes: Vec<u8> },
}

pub struct RecordingApi {
  release_id: u64,
  fail_lookup: bool,
  fail_create: bool,
  fail_uploads: Vec<String>,
  calls: RefCell<Vec<Call>>,
  tokens: RefCell<Vec<String>>,
}

impl RecordingApi {
  pub fn new() -> Self {
    Self {
      release_id: 42,
      fail_lookup: false,
      fail_create: false,
      fail_uploads: Vec::new(),
      calls: RefCell::new(Vec::new()),
      tokens: RefCell::new(Vec::new()),
    }
  }

  /// Lookup-by-tag answers 404
  pub fn failing_lookup(mut self) -> Self {
    self.fail_lookup = true;
    self
  }

  /// Create answers 422 (tag already has a release)
  pub fn failing_create(mut self) -> Self {
    self.fail_create = true;
    self
  }

  /// Uploads of `name` answer 422
  pub fn failing_upload(mut self, name: &str) -> Self {
    self.fail_uploads.push(name.to_string());
    self
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }

  pub fn tokens(&self) -> Vec<String> {
    self.tokens.borrow().clone()
  }

  pub fn upload_names(&self) -> Vec<String> {
    self
      .calls
      .borrow()
      .iter()
      .filter_map(|c| match c {
        Call::Upload { name, .. } => Some(name.clone()),
        _ => None,
      })
      .collect()
  }

  /// Number of create/update/upload calls
  pub fn mutations(&self) -> usize {
    self
      .calls
      .borrow()
      .iter()
      .filter(|c| !matches!(c, Call::Lookup { .. }))
      .count()
  }

  fn record(&self, call: Call, token: &str) {
    self.calls.borrow_mut().push(call);
    self.tokens.borrow_mut().push(token.to_string());
  }
}

fn status(status: u16, message: &str) -> RemoteError {
  RemoteError::Status {
    status,
    message: message.to_string(),
  }
}

impl ReleaseApi for RecordingApi {
  fn release_id_by_tag(&self, repo: &RepoId, tag: &str, token: &str) -> GreaseResult<ReleaseId> {
    self.record(
      Call::Lookup {
        repo: repo.to_string(),
        tag: tag.to_string(),
      },
      token,
    );
    if self.fail_lookup {
      return Err(status(404, "Not Found").into());
    }
    Ok(ReleaseId(self.release_id))
  }

  fn create_release(&self, repo: &RepoId, release: &ReleaseDescriptor, token: &str) -> GreaseResult<ReleaseId> {
    self.record(
      Call::Create {
        repo: repo.to_string(),
        release: release.clone(),
      },
      token,
    );
    if self.fail_create {
      return Err(status(422, "Validation Failed").into());
    }
    Ok(ReleaseId(self.release_id))
  }

  fn update_release(
    &self,
    _repo: &RepoId,
    id: ReleaseId,
    release: &ReleaseDescriptor,
    token: &str,
  ) -> GreaseResult<ReleaseId> {
    self.record(
      Call::Update {
        id: id.0,
        release: release.clone(),
      },
      token,
    );
    Ok(id)
  }

  fn upload_asset(
    &self,
    _repo: &RepoId,
    id: ReleaseId,
    mut file: File,
    size: u64,
    name: &str,
    token: &str,
  ) -> GreaseResult<()> {
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    assert_eq!(bytes.len() as u64, size, "declared size must match file length");

    self.record(
      Call::Upload {
        id: id.0,
        name: name.to_string(),
        bytes,
      },
      token,
    );
    if self.fail_uploads.iter().any(|n| n == name) {
      return Err(status(422, "Validation Failed").into());
    }
    Ok(())
  }
}
