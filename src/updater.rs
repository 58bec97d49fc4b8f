use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::envfile::EnvFile;
use crate::error::Result;
use crate::warnings::SyncWarning;

/// Entry toggled off for maven builds, which compile inside the build
/// container instead of from host sources.
pub const HOST_SRC_KEY: &str = "BUILD_HOST_SRC";

/// Entry pointed at the release branch for maven builds.
pub const BRANCH_KEY: &str = "BRANCH";

/// The inputs of one update run.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    /// Branch the env file currently reflects
    pub current_branch: String,
    /// Branch whose version the env file should be updated to reflect
    pub release_branch: String,
    /// Also toggle the host-source flag and the branch reference
    pub maven_build: bool,
}

/// The planned result of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The rewritten file content
    pub content: String,
    /// Whether the content differs from the input
    pub changed: bool,
    /// Number of version occurrences replaced inside entry values
    pub replacements: usize,
    /// Non-fatal conditions hit while planning
    pub warnings: Vec<SyncWarning>,
}

/// Plans an update of env file content without touching the filesystem.
///
/// Resolves both branches in the configured map before any mutation, so an
/// unknown branch fails the run with the content untouched. The version
/// substitution applies to entry values only; comments, blank lines, and
/// unparsable lines pass through verbatim.
pub fn plan_update(
    content: &str,
    request: &UpdateRequest,
    config: &Config,
) -> Result<UpdateOutcome> {
    let release_version = config.version_for(&request.release_branch)?;
    let current_version = config.version_for(&request.current_branch)?;

    let mut file = EnvFile::parse(content);
    let mut warnings = Vec::new();

    if request.maven_build {
        if !file.set_if_value(HOST_SRC_KEY, "true", "false") {
            warnings.push(SyncWarning::EntryNotToggled {
                key: HOST_SRC_KEY.to_string(),
                expected: "true".to_string(),
            });
        }
        if !file.set_if_value(BRANCH_KEY, &config.defaults.branch, &request.release_branch) {
            warnings.push(SyncWarning::EntryNotToggled {
                key: BRANCH_KEY.to_string(),
                expected: config.defaults.branch.clone(),
            });
        }
    }

    let replacements = if current_version == release_version {
        0
    } else {
        let replaced = file.replace_in_values(current_version, release_version);
        if replaced == 0 {
            warnings.push(SyncWarning::VersionNotFound {
                version: current_version.to_string(),
            });
        }
        replaced
    };

    let new_content = file.render();
    let changed = new_content != content;

    Ok(UpdateOutcome {
        content: new_content,
        changed,
        replacements,
        warnings,
    })
}

/// Updates an env file in place.
///
/// Reads the file, plans the update, and overwrites the file with the new
/// content. The write is skipped entirely when nothing changed, and never
/// happens when branch resolution fails.
pub fn update_env_file(
    path: &Path,
    request: &UpdateRequest,
    config: &Config,
) -> Result<UpdateOutcome> {
    let content = fs::read_to_string(path)?;

    let outcome = plan_update(&content, request, config)?;
    if outcome.changed {
        fs::write(path, &outcome.content)?;
    }

    Ok(outcome)
}
