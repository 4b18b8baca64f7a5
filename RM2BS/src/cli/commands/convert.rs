//! CLI interface for single-file conversion
use std::path::Path;

use console::Emoji;

use crate::cli::progress::{DISK, GEAR, LOOKING_GLASS, print_step};

/// Conversion steps in order: read, convert, write
const STEP_COUNT: usize = 3;

fn step_emoji(step: usize) -> Emoji<'static, 'static> {
    match step {
        1 => LOOKING_GLASS,
        2 => GEAR,
        _ => DISK,
    }
}

pub fn execute(source: &Path, destination: Option<&Path>, quiet: bool) -> anyhow::Result<()> {
    let is_jslot = source
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(crate::batch::JSLOT_EXTENSION));
    if !is_jslot {
        anyhow::bail!("Expected a .jslot file, got {}", source.display());
    }

    let destination = destination.map_or_else(|| source.with_extension("xml"), Path::to_path_buf);

    if !quiet {
        println!("Converting {} to {}", source.display(), destination.display());
    }

    let step = std::cell::Cell::new(0);
    crate::converter::convert_jslot_to_xml_with_progress(source, destination.as_path(), &|msg| {
        step.set(step.get() + 1);
        if !quiet {
            print_step(step.get(), STEP_COUNT, step_emoji(step.get()), msg);
        }
    })?;

    println!("Created preset {}", destination.display());
    Ok(())
}
