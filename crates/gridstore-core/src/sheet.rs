//! Sheet naming and positioning rules shared by all backends

use std::fmt;

use crate::error::{Error, Result};
use crate::MAX_SHEET_NAME_LEN;

const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A sheet addressed by 0-based position or by exact name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SheetRef {
    Index(usize),
    Name(String),
}

impl SheetRef {
    /// Resolve against the sheet names of a workbook, in storage order
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<usize> {
        match self {
            SheetRef::Index(index) if *index < names.len() => Ok(*index),
            SheetRef::Index(index) => Err(Error::SheetOutOfBounds(*index, names.len())),
            SheetRef::Name(name) => names
                .iter()
                .position(|n| n.as_ref() == name)
                .ok_or_else(|| Error::SheetNotFound(name.clone())),
        }
    }
}

impl From<usize> for SheetRef {
    fn from(index: usize) -> Self {
        SheetRef::Index(index)
    }
}

impl From<&str> for SheetRef {
    fn from(name: &str) -> Self {
        SheetRef::Name(name.to_string())
    }
}

impl From<String> for SheetRef {
    fn from(name: String) -> Self {
        SheetRef::Name(name)
    }
}

impl From<&String> for SheetRef {
    fn from(name: &String) -> Self {
        SheetRef::Name(name.clone())
    }
}

impl fmt::Display for SheetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetRef::Index(index) => write!(f, "#{}", index),
            SheetRef::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Map a possibly negative insertion index onto a position in a list of
/// `len` sheets.
///
/// Follows list insertion rules: negative indices count back from the end
/// and anything out of range clamps to the nearest end, so the result is
/// always in `0..=len`.
///
/// ```
/// use gridstore_core::insert_position;
///
/// assert_eq!(insert_position(1, 3), 1);
/// assert_eq!(insert_position(-1, 3), 2);
/// assert_eq!(insert_position(10, 3), 3);
/// assert_eq!(insert_position(-10, 3), 0);
/// ```
pub fn insert_position(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

/// Validate a new sheet name against the names already in the workbook
///
/// Names must be non-empty, at most [`MAX_SHEET_NAME_LEN`] characters, free
/// of `: \ / ? * [ ]`, must not start or end with `'`, and must be unique
/// ignoring case.
pub fn validate_sheet_name<S: AsRef<str>>(name: &str, existing: &[S]) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
    }
    if name.chars().count() > MAX_SHEET_NAME_LEN {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name too long (max {} characters)",
            MAX_SHEET_NAME_LEN
        )));
    }

    if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
        return Err(Error::InvalidSheetName(format!(
            "Sheet name cannot contain '{}'",
            c
        )));
    }

    if name.starts_with('\'') || name.ends_with('\'') {
        return Err(Error::InvalidSheetName(
            "Sheet name cannot start or end with an apostrophe".into(),
        ));
    }

    // Excel compares sheet names case-insensitively
    let name_lower = name.to_lowercase();
    if existing
        .iter()
        .any(|other| other.as_ref().to_lowercase() == name_lower)
    {
        return Err(Error::DuplicateSheetName(name.into()));
    }

    Ok(())
}
