//! CLI command for converting a whole preset folder

use std::path::Path;
use std::time::Instant;

use console::style;

use crate::batch::{BatchConfig, BatchPhase, FileOutcome, convert_directory_with_progress};
use crate::cli::progress::{GEAR, LOOKING_GLASS, print_done, print_step, simple_bar};

pub fn execute(
    root: &Path,
    input_dir: Option<&Path>,
    output_dir: Option<&Path>,
    quiet: bool,
) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = BatchConfig::from_root(root);
    if let Some(dir) = input_dir {
        config.input_dir = dir.to_path_buf();
    }
    if let Some(dir) = output_dir {
        config.output_dir = dir.to_path_buf();
    }

    if !quiet {
        print_step(
            1,
            2,
            LOOKING_GLASS,
            &format!("Scanning {}...", config.input_dir.display()),
        );
        print_step(
            2,
            2,
            GEAR,
            &format!("Writing presets to {}...", config.output_dir.display()),
        );
    }

    let pb = simple_bar(0, "Converting", quiet);
    let result = convert_directory_with_progress(&config, &|progress| {
        if progress.phase == BatchPhase::Converting {
            pb.set_length(progress.total as u64);
            pb.set_position(progress.current as u64);
            if let Some(ref name) = progress.current_file {
                pb.set_message(format!("{} {name}", progress.phase.as_str()));
            }
        }
    })?;
    pb.finish_and_clear();

    if result.reports.is_empty() {
        println!("No .jslot files found in: {}", config.input_dir.display());
        return Ok(());
    }

    println!();
    println!("Conversion complete:");
    println!("  Created: {}", style(result.created()).green());
    println!("  Skipped: {}", result.skipped());
    println!("  Invalid: {}", style(result.invalid()).yellow());
    println!("  Failed:  {}", style(result.failed()).red());

    if result.failed() > 0 {
        println!();
        println!("Failures:");
        for report in &result.reports {
            if let FileOutcome::Failed(ref msg) = report.outcome {
                println!("  {}: {msg}", report.source.display());
            }
        }
    }

    if !quiet {
        print_done(start.elapsed());
    }

    Ok(())
}
