//! Board name validation for anonboard.
//!
//! Boards have no creation step: the first write under a name creates the
//! namespace. The name therefore reaches the storage layer directly and is
//! restricted to a safe character set before any query runs.

use crate::{AnonboardError, Result};

/// Maximum length of a board name (in characters).
pub const MAX_BOARD_NAME_LENGTH: usize = 50;

/// Validate a board name.
///
/// Accepted names are 1 to [`MAX_BOARD_NAME_LENGTH`] characters drawn from
/// ASCII letters, digits, `_` and `-`.
pub fn validate_board_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AnonboardError::Validation(
            "board name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_BOARD_NAME_LENGTH {
        return Err(AnonboardError::Validation(format!(
            "board name too long (max {} characters)",
            MAX_BOARD_NAME_LENGTH
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AnonboardError::Validation(
            "board name may only contain letters, digits, '_' and '-'".to_string(),
        ));
    }
    Ok(())
}
