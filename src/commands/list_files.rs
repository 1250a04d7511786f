//! `grease list-files GLOB_PATTERN`
//!
//! For trouble-shooting a glob pattern before using it to pick assets.

use crate::core::error::GreaseResult;
use crate::files::find_files;
use crate::utils::validate_positional_count;
use std::path::PathBuf;

/// Run the list-files command
///
/// Never contacts GitHub. Zero matches is not an error.
pub fn run_list_files(args: &[String]) -> GreaseResult<Vec<PathBuf>> {
  // Expected positional arguments (1): GLOB_PATTERN
  validate_positional_count(args, 1)?;

  let pattern = args[0].as_str();
  tracing::debug!(pattern, "list-files arguments");

  let files = find_files(pattern)?;

  if files.is_empty() {
    println!("No matches found");
  }

  for file in &files {
    println!("File match found: {}", file.display());
  }

  Ok(files)
}
