use std::fmt;

/// Non-fatal conditions hit while planning an env file update.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncWarning {
    /// The current version string was not found in any entry value
    VersionNotFound { version: String },
    /// A maven-build toggle found no entry with the expected value
    EntryNotToggled { key: String, expected: String },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncWarning::VersionNotFound { version } => {
                write!(
                    f,
                    "Version '{}' not found in any entry value; the file may already be up to date",
                    version
                )
            }
            SyncWarning::EntryNotToggled { key, expected } => {
                write!(f, "No '{}={}' entry found; left unchanged", key, expected)
            }
        }
    }
}
