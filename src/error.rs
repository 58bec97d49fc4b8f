use thiserror::Error;

/// Unified error type for env-release operations
#[derive(Error, Debug)]
pub enum EnvReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown branch '{branch}' (known branches: {known})")]
    UnknownBranch { branch: String, known: String },

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in env-release
pub type Result<T> = std::result::Result<T, EnvReleaseError>;

impl EnvReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        EnvReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        EnvReleaseError::Version(msg.into())
    }

    /// Create an unknown-branch error listing the branches that would have
    /// been accepted, sorted for stable output
    pub fn unknown_branch<I, S>(branch: impl Into<String>, known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = known
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        names.sort();

        EnvReleaseError::UnknownBranch {
            branch: branch.into(),
            known: names.join(", "),
        }
    }
}
