use git2::Repository;

use crate::error::{EnvReleaseError, Result};

/// Wrapper around a git2 Repository for branch discovery.
///
/// Used to detect the checked-out branch when the caller does not name one
/// explicitly.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discovers the git repository containing the current working
    /// directory or any of its parents.
    ///
    /// # Returns
    /// * `Ok(GitRepo)` - Successfully initialized repository wrapper
    /// * `Err` - If not in a git repository
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(GitRepo { repo })
    }

    /// Returns the shorthand name of the checked-out branch.
    ///
    /// # Returns
    /// * `Ok(String)` - Branch name (e.g., "master")
    /// * `Err` - If HEAD is detached or the branch name is not valid UTF-8
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        if !head.is_branch() {
            return Err(EnvReleaseError::config(
                "HEAD is not on a branch; pass --current-branch explicitly",
            ));
        }

        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| EnvReleaseError::config("branch name is not valid UTF-8"))
    }
}
