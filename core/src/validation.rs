//! Input validation for list and todo operations.
//!
//! All helpers are pure. Index parsing happens only here, so the rest of the
//! crate works with positions that are already known to be in range.

use crate::error::{ListError, NameKind, Resource};
use crate::types::TodoList;

/// Maximum length of list and todo names, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

fn has_valid_length(name: &str) -> bool {
    (1..=MAX_NAME_LENGTH).contains(&name.chars().count())
}

/// Validates a list name against the lists it must be unique among.
///
/// `existing` is read at call time; callers pass the current collection
/// (or the collection minus the list being renamed).
///
/// # Errors
///
/// - `InvalidLength` if `name` is empty or longer than [`MAX_NAME_LENGTH`]
/// - `DuplicateName` if a list in `existing` has exactly this name
pub fn validate_list_name<'a, I>(name: &str, existing: I) -> Result<(), ListError>
where
    I: IntoIterator<Item = &'a TodoList>,
{
    if !has_valid_length(name) {
        return Err(ListError::InvalidLength(NameKind::List));
    }

    if existing.into_iter().any(|list| list.name == name) {
        return Err(ListError::DuplicateName);
    }

    Ok(())
}

/// Validates a todo name.
///
/// # Errors
///
/// `InvalidLength` if `name` is empty or longer than [`MAX_NAME_LENGTH`].
pub fn validate_todo_name(name: &str) -> Result<(), ListError> {
    if has_valid_length(name) {
        Ok(())
    } else {
        Err(ListError::InvalidLength(NameKind::Todo))
    }
}

/// Parses a raw index and checks it against a collection length.
///
/// Accepts an integer literal with an optional leading sign and ASCII
/// digits only. Returns the position on success.
///
/// # Errors
///
/// `NotFound(resource)` if `raw` is not an integer literal or its value is
/// outside `0..len`.
pub fn validate_index(raw: &str, len: usize, resource: Resource) -> Result<usize, ListError> {
    let not_found = || ListError::NotFound(resource);

    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }

    // Literals too large for i128 are out of range for any collection.
    let value: i128 = raw.parse().map_err(|_| not_found())?;

    usize::try_from(value)
        .ok()
        .filter(|&index| index < len)
        .ok_or_else(not_found)
}

/// Parses the `completed` form field.
///
/// # Errors
///
/// `MalformedInput` unless `raw` is exactly `"true"` or `"false"`.
pub fn parse_completed(raw: &str) -> Result<bool, ListError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ListError::MalformedInput(other.to_string())),
    }
}
