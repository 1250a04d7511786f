//! Error types for grease with contextual messages and exit codes
//!
//! Every failure the CLI can report is a variant of [`GreaseError`]. Each variant
//! maps to a process exit code at the single place the process terminates
//! (`main`), and may carry a help message pointing the user at a fix.

use std::fmt;
use std::io;

/// Exit codes for grease
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Remote or local I/O failure
  Failure = 1,
  /// Command line usage error (sysexits `EX_USAGE`)
  Usage = 64,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for grease
#[derive(Debug)]
pub enum GreaseError {
  /// Malformed glob syntax
  BadGlobPattern { pattern: String },

  /// Malformed positional value (e.g. REPO)
  BadArgument { argument: String, reason: String },

  /// Wrong number of positional arguments for the command
  IncorrectArgumentCount { expected: usize, received: usize },

  /// Required flag/value absent
  MissingRequiredArgument { argument: String },

  /// Any failure reported by the release-hosting service
  Remote(RemoteError),

  /// Local I/O errors
  Io(io::Error),
}

impl GreaseError {
  pub fn bad_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
    GreaseError::BadArgument {
      argument: argument.into(),
      reason: reason.into(),
    }
  }

  pub fn missing_argument(argument: impl Into<String>) -> Self {
    GreaseError::MissingRequiredArgument {
      argument: argument.into(),
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      GreaseError::BadGlobPattern { .. }
      | GreaseError::BadArgument { .. }
      | GreaseError::IncorrectArgumentCount { .. }
      | GreaseError::MissingRequiredArgument { .. } => ExitCode::Usage,
      GreaseError::Remote(_) | GreaseError::Io(_) => ExitCode::Failure,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      GreaseError::BadGlobPattern { .. } => Some(
        "Check that every `[` opens a matching `]`. Try the pattern with `grease list-files` first.".to_string(),
      ),
      GreaseError::BadArgument { argument, .. } if argument == "REPO" => {
        Some("Pass the repository as owner/name, for example `timberio/grease`.".to_string())
      }
      GreaseError::MissingRequiredArgument { argument } if argument == "--github-token" => {
        Some("Pass --github-token or set the GITHUB_TOKEN environment variable.".to_string())
      }
      GreaseError::Remote(e) => e.help_message(),
      _ => None,
    }
  }
}

impl fmt::Display for GreaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GreaseError::BadGlobPattern { pattern } => {
        write!(f, "The pattern \"{}\" is not a valid glob pattern", pattern)
      }
      GreaseError::BadArgument { argument, reason } => write!(f, "Bad argument {}: {}", argument, reason),
      GreaseError::IncorrectArgumentCount { expected, received } => write!(
        f,
        "Expected {} positional arguments but received {}",
        expected, received
      ),
      GreaseError::MissingRequiredArgument { argument } => {
        write!(f, "Required argument \"{}\" was not provided", argument)
      }
      GreaseError::Remote(e) => write!(f, "{}", e),
      GreaseError::Io(e) => write!(f, "I/O error: {}", e),
    }
  }
}

impl std::error::Error for GreaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      GreaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for GreaseError {
  fn from(err: io::Error) -> Self {
    GreaseError::Io(err)
  }
}

impl From<RemoteError> for GreaseError {
  fn from(err: RemoteError) -> Self {
    GreaseError::Remote(err)
  }
}

/// Failures talking to the GitHub API
///
/// These are surfaced as-is; grease does not retry or reinterpret them.
#[derive(Debug)]
pub enum RemoteError {
  /// The service answered with a non-success status
  Status { status: u16, message: String },

  /// The request never got an answer (DNS, TLS, connection reset, ...)
  Transport { message: String },

  /// A success response whose body could not be decoded
  Decode { message: String },
}

impl RemoteError {
  fn help_message(&self) -> Option<String> {
    match self {
      RemoteError::Status { status: 401, .. } => {
        Some("The token was rejected. Check that it is valid and has not expired.".to_string())
      }
      RemoteError::Status { status: 403, .. } => {
        Some("The token lacks permission for this repository. It needs the `repo` scope.".to_string())
      }
      RemoteError::Status { status: 404, .. } => Some(
        "The repository or release was not found. Check the owner/name and that the tag has a release.".to_string(),
      ),
      RemoteError::Status { status: 422, .. } => {
        Some("GitHub rejected the request. A release or asset with that name may already exist.".to_string())
      }
      _ => None,
    }
  }
}

impl fmt::Display for RemoteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RemoteError::Status { status, message } => write!(f, "GitHub API error ({}): {}", status, message),
      RemoteError::Transport { message } => write!(f, "GitHub API request failed: {}", message),
      RemoteError::Decode { message } => write!(f, "Unexpected GitHub API response: {}", message),
    }
  }
}

/// Result type alias for grease
pub type GreaseResult<T> = Result<T, GreaseError>;

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &GreaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
