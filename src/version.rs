use semver::Version;

use crate::error::{EnvReleaseError, Result};

/// Parses a configured version string into a semantic version.
///
/// Accepts plain versions ("2.6.0") as well as versions carrying a
/// pre-release marker ("3.0.0-SNAPSHOT").
///
/// # Arguments
/// * `raw` - Version string to parse
///
/// # Returns
/// * `Ok(Version)` - Successfully parsed version
/// * `Err` - If the string is not a valid semantic version
pub fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw.trim()).map_err(|e| {
        EnvReleaseError::version(format!("'{}' is not a semantic version: {}", raw, e))
    })
}

/// Returns true when the version carries a pre-release marker such as
/// `-SNAPSHOT`.
pub fn is_prerelease(version: &Version) -> bool {
    !version.pre.is_empty()
}
