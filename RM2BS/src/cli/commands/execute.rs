//! Command execution implementations

use super::Commands;
use super::{batch, convert, list};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Batch {
                root,
                input_dir,
                output_dir,
                quiet,
            } => batch::execute(root, input_dir.as_deref(), output_dir.as_deref(), *quiet),
            Commands::Convert {
                source,
                destination,
                quiet,
            } => convert::execute(source, destination.as_deref(), *quiet),
            Commands::List { source, count } => list::execute(source, *count),
        }
    }
}
