//! Local file discovery via shell-style glob patterns

use crate::core::error::{GreaseError, GreaseResult};
use glob::MatchOptions;
use std::path::PathBuf;

/// A local file to upload, plus the name it is uploaded under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
  pub path: PathBuf,
  /// Final path segment of `path`
  pub name: String,
}

impl AssetFile {
  pub fn new(path: PathBuf) -> Self {
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().into_owned())
      .unwrap_or_else(|| path.to_string_lossy().into_owned());
    Self { path, name }
  }
}

/// Expand `pattern` into the sorted list of matching paths.
///
/// Supports `*`, `?` and `[...]`. Wildcards never cross a `/`, and `**` is
/// the same as `*` (no recursive descent). An empty pattern or one that
/// matches nothing gives an empty list.
pub fn find_files(pattern: &str) -> GreaseResult<Vec<PathBuf>> {
  if pattern.is_empty() {
    return Ok(Vec::new());
  }

  let options = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
  };

  let entries = glob::glob_with(&collapse_stars(pattern), options).map_err(|_| GreaseError::BadGlobPattern {
    pattern: pattern.to_string(),
  })?;

  // Unreadable directories are skipped, not reported
  let mut files: Vec<PathBuf> = entries.filter_map(Result::ok).collect();
  files.sort();

  tracing::debug!(pattern, matches = files.len(), "resolved glob pattern");
  Ok(files)
}

/// Resolve an optional `--assets` pattern into upload candidates
pub fn find_assets(pattern: Option<&str>) -> GreaseResult<Vec<AssetFile>> {
  match pattern {
    None => Ok(Vec::new()),
    Some(pattern) => Ok(find_files(pattern)?.into_iter().map(AssetFile::new).collect()),
  }
}

/// Fold every run of `*` into one so `**` cannot recurse
fn collapse_stars(pattern: &str) -> String {
  let mut out = String::with_capacity(pattern.len());
  for c in pattern.chars() {
    if c == '*' && out.ends_with('*') {
      continue;
    }
    out.push(c);
  }
  out
}
