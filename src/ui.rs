use console::style;

use crate::config::Config;
use crate::updater::UpdateOutcome;
use crate::version;
use crate::warnings::SyncWarning;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_warning(warning: &SyncWarning) {
    println!("{} {}", style("!").yellow().bold(), warning);
}

/// Prints the configured branches and their versions, sorted by branch
/// name, marking pre-release versions.
pub fn display_branch_versions(config: &Config) {
    println!("{}", style("Configured branches:").bold());

    let mut branches: Vec<(&String, &String)> = config.branches.iter().collect();
    branches.sort();

    for (branch, raw) in branches {
        let marker = match version::parse_version(raw) {
            Ok(v) if version::is_prerelease(&v) => " (pre-release)",
            _ => "",
        };
        println!("  {} -> {}{}", branch, raw, marker);
    }
}

/// Prints a preview of what an update run would do, without writing.
pub fn display_dry_run(path: &str, outcome: &UpdateOutcome) {
    println!("\n{}", style("Dry run:").bold());
    if outcome.changed {
        println!(
            "  Would rewrite {} ({} value substitution(s))",
            path, outcome.replacements
        );
    } else {
        println!("  {} is already up to date", path);
    }
}
