use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use changelog_updater::cli::{default_output_path, run_changelog_workflow, ChangelogWorkflowArgs};
use changelog_updater::{config, git, ui};

#[derive(clap::Parser)]
#[command(
    name = "changelog-updater",
    version,
    about = "Update the changelog file from tagged git history"
)]
struct Args {
    #[arg(
        short,
        long,
        help = "The output file path. Defaults to CHANGELOG.md in the repository root"
    )]
    output: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Regenerate every version section and overwrite the output file"
    )]
    force: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the resulting changelog without writing it")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `-v` flags
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let repo = git::open_repository(config.history.backend, &cwd)
        .context("Git repository error")?;

    let output_path = args
        .output
        .unwrap_or_else(|| default_output_path(repo.as_ref(), &config));

    let workflow_args = ChangelogWorkflowArgs {
        output_path,
        force: args.force,
        dry_run: args.dry_run,
    };

    ui::display_status(&format!(
        "{} {}",
        if workflow_args.force {
            "Regenerating"
        } else {
            "Updating"
        },
        workflow_args.output_path.display()
    ));

    let result = run_changelog_workflow(repo.as_ref(), &workflow_args, &config)
        .context("Failed to update changelog")?;

    for warning in &result.warnings {
        ui::display_warning(warning);
    }

    if workflow_args.dry_run {
        ui::display_preview(&result.content);
    }

    ui::display_sections(&result.sections);

    if result.written {
        ui::display_success(&format!(
            "Changelog written to {}",
            result.output_path.display()
        ));
    }

    Ok(())
}
