use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use uprename::{
    run, AssumeYes, Prompter, RunOptions, RunOutcome, RunSummary, StdioPrompter,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rename an Unreal Engine project in place: descriptor, source tree, and API macros",
    long_about = None
)]
struct Args {
    /// Project root directory containing the .uproject file (defaults to current directory)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Current project name (defaults to the .uproject file's base name)
    #[arg(long)]
    old: Option<String>,

    /// New project name (skips the interactive name prompt)
    #[arg(long)]
    new: Option<String>,

    /// Answer yes to both confirmation prompts; requires --new
    #[arg(long, short)]
    yes: bool,

    /// Show each migrated file
    #[arg(long, short)]
    verbose: bool,
}

fn print_summary(summary: &RunSummary) {
    println!(
        "{}",
        format!("Renamed {} to {}", summary.old_name, summary.new_name).bold()
    );
    println!(
        "  {}",
        format!("Files migrated: {}", summary.migrated_count()).green()
    );
    if summary.artifacts_removed > 0 {
        println!("  Stale artifacts removed: {}", summary.artifacts_removed);
    }
    if summary.failed_count() > 0 {
        println!(
            "  {}",
            format!("Files failed: {}", summary.failed_count()).red()
        );
        for failure in summary.failures() {
            println!("    - {}", failure.path.display());
        }
    }
    println!();
    println!(
        "Re-generate your project files now, rename the project folder if desired, \
         and update the project name in DefaultEngine.ini."
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.yes && args.new.is_none() {
        bail!("--yes requires --new <NAME>; refusing to rename without a target name");
    }

    let mut stdio = StdioPrompter;
    let mut assume_yes = AssumeYes;
    let prompter: &mut dyn Prompter = if args.yes {
        &mut assume_yes
    } else {
        &mut stdio
    };

    let options = RunOptions {
        old_name: args.old.clone(),
        new_name: args.new.clone(),
        verbose: args.verbose,
    };

    match run(&args.root, &options, prompter)? {
        RunOutcome::Completed(summary) => print_summary(&summary),
        RunOutcome::Aborted(reason) => println!("{}", reason.message()),
    }

    Ok(())
}
