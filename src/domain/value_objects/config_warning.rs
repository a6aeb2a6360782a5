//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while loading `hotelier.toml`.
///
/// Raised for keys the configuration schema does not know about; the
/// rest of the file still applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last path segment)
    pub key: String,
    /// The file the key was found in
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if found
    pub line: Option<usize>,
    /// Closest known key, if one is near enough
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown config key '{}' in {}",
            self.key,
            self.file.display()
        )?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
