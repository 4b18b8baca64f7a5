//! Format conversion utilities
//!
//! - jslot (RaceMenu JSON) → BodySlide slider preset XML

pub mod jslot_preset;

/// Progress callback type for conversion operations.
/// The callback receives a message describing the current step.
pub type ProgressCallback<'a> = &'a dyn Fn(&str);

pub use jslot_preset::{
    // Primary conversion functions
    convert_jslot_to_xml, convert_jslot_to_xml_with_progress,
    // Helper functions
    jslot_to_preset, jslot_to_slider_presets, preset_base_name,
    // Fixed preset data
    CBBE_MORPH_KEY, PRESET_GROUPS, PRESET_NAME_PREFIX, PRESET_SET,
};
