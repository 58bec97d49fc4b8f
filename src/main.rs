use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use env_release::updater::{self, UpdateRequest};
use env_release::{config, git_ops, ui};

#[derive(clap::Parser)]
#[command(
    name = "env-release",
    about = "Sync a .env file's version and build flags with a release branch"
)]
struct Args {
    #[arg(
        short,
        long,
        help = "Release branch whose version the env file should reflect"
    )]
    release_branch: Option<String>,

    #[arg(
        short = 'b',
        long,
        help = "Branch the env file currently reflects (default: checked-out branch)"
    )]
    current_branch: Option<String>,

    #[arg(
        short,
        long,
        help = "Maven build in Docker: disable BUILD_HOST_SRC and point BRANCH at the release branch"
    )]
    maven_build: bool,

    #[arg(short, long, help = "Path to the env file to update")]
    env_file: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Show configured branches and their versions and exit")]
    list: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("env-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        ui::display_branch_versions(&config);
        return Ok(());
    }

    let release_branch = match args.release_branch {
        Some(branch) => branch,
        None => {
            ui::display_error("--release-branch is required");
            std::process::exit(1);
        }
    };

    // Resolve the current branch: explicit flag, then the checked-out
    // branch, then the configured default
    let current_branch = match args.current_branch {
        Some(branch) => branch,
        None => match git_ops::GitRepo::discover().and_then(|repo| repo.current_branch()) {
            Ok(branch) => {
                ui::display_status(&format!("Detected checked-out branch '{}'", branch));
                branch
            }
            Err(_) => config.defaults.branch.clone(),
        },
    };

    // Verify both branches resolve before touching the file
    for branch in [&release_branch, &current_branch] {
        if let Err(e) = config.version_for(branch) {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    let env_path = args
        .env_file
        .unwrap_or_else(|| config.defaults.env_file.clone());

    let request = UpdateRequest {
        current_branch,
        release_branch,
        maven_build: args.maven_build,
    };

    if args.dry_run {
        let content = match fs::read_to_string(&env_path) {
            Ok(content) => content,
            Err(e) => {
                ui::display_error(&format!("Cannot read '{}': {}", env_path, e));
                std::process::exit(1);
            }
        };

        match updater::plan_update(&content, &request, &config) {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    ui::display_warning(warning);
                }
                ui::display_dry_run(&env_path, &outcome);
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    ui::display_status(&format!(
        "Updating {} for release branch '{}'",
        env_path, request.release_branch
    ));

    match updater::update_env_file(Path::new(&env_path), &request, &config) {
        Ok(outcome) => {
            for warning in &outcome.warnings {
                ui::display_warning(warning);
            }
            if outcome.changed {
                ui::display_success(&format!(
                    "Updated {} ({} value substitution(s))",
                    env_path, outcome.replacements
                ));
            } else {
                ui::display_success(&format!("{} already up to date", env_path));
            }
        }
        Err(e) => {
            ui::display_error(&format!("Failed to update '{}': {}", env_path, e));
            std::process::exit(1);
        }
    }

    Ok(())
}
