//! Diagnostic severity levels.

use std::fmt;

/// Diagnostic severity level
///
/// ```
/// use chi_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert!(Level::Error.is_error());
/// assert!(!Level::Warning.is_error());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Input that could not be tokenized as written
    Error,
    /// Input that was tokenized but only partially understood
    Warning,
    /// Additional context
    Note,
}

impl Level {
    /// Returns true for [`Level::Error`].
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Level::Error)
    }

    /// Lower-case name of the level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
