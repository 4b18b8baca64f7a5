//! # RM2BS
//!
//! Converts RaceMenu character presets (`.jslot`) into BodySlide slider
//! presets (`.xml`), so a body shaped in RaceMenu can be built in BodySlide.
//!
//! ## Quick Start
//!
//! ### Converting a Preset Folder
//!
//! ```no_run
//! use rm2bs::batch::{BatchConfig, convert_directory};
//!
//! // Reads SKSE/Plugins/CharGen/Presets/*.jslot and writes
//! // CalienteTools/BodySlide/SliderPresets/<name>.xml
//! let result = convert_directory(&BatchConfig::default())?;
//! println!("Created {} presets", result.created());
//! # Ok::<(), rm2bs::Error>(())
//! ```
//!
//! ### Converting a Single File
//!
//! ```no_run
//! use rm2bs::converter::convert_jslot_to_xml;
//!
//! convert_jslot_to_xml("Lydia.jslot", "Lydia.xml")?;
//! # Ok::<(), rm2bs::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `rm2bs` command-line binary

pub mod error;
pub mod formats;
pub mod converter;
pub mod batch;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::jslot::{JslotDocument, BodyMorph, MorphKey, read_jslot};
    pub use crate::formats::slider_preset::{
        SliderPresets, Preset, SetSlider, SliderSize, write_slider_presets,
    };
    pub use crate::converter::{convert_jslot_to_xml, jslot_to_preset, jslot_to_slider_presets};
    pub use crate::batch::{BatchConfig, BatchResult, FileOutcome, convert_directory};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
