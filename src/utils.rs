//! Positional argument helpers shared by all commands

use crate::core::error::{GreaseError, GreaseResult};

/// Fail unless exactly `expected` positional arguments were given
///
/// Commands take their positionals as a plain list so a wrong count is
/// reported with both numbers instead of clap's generic usage error.
pub fn validate_positional_count(args: &[String], expected: usize) -> GreaseResult<()> {
  if args.len() != expected {
    return Err(GreaseError::IncorrectArgumentCount {
      expected,
      received: args.len(),
    });
  }
  Ok(())
}
