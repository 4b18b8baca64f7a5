use clap::Subcommand;
use std::path::PathBuf;

pub mod batch;
pub mod convert;
pub mod execute;
pub mod list;

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every RaceMenu preset that has no BodySlide preset yet
    Batch {
        /// Game data root containing SKSE/ and CalienteTools/
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Override the .jslot directory (default: <root>/SKSE/Plugins/CharGen/Presets)
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Override the output directory (default: <root>/CalienteTools/BodySlide/SliderPresets)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Convert a single .jslot file
    Convert {
        /// Source .jslot file
        #[arg(short, long)]
        source: PathBuf,

        /// Destination .xml file (default: source with .xml extension)
        #[arg(short, long)]
        destination: Option<PathBuf>,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show the sliders of a .jslot file or an existing slider preset .xml
    List {
        /// .jslot or .xml file
        #[arg(short, long)]
        source: PathBuf,

        /// Only show slider counts
        #[arg(short, long)]
        count: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Batch {
            root: PathBuf::from("."),
            input_dir: None,
            output_dir: None,
            quiet: false,
        }
    }
}
