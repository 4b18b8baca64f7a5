//! File format handlers
//!
//! - `jslot` - RaceMenu character presets (JSON, input)
//! - `slider_preset` - BodySlide slider presets (XML, output)

pub mod jslot;
pub mod slider_preset;

// Re-export main document types
pub use jslot::{JslotDocument, BodyMorph, MorphKey, ActorInfo, read_jslot, parse_jslot};
pub use slider_preset::{
    SliderPresets, Preset, PresetGroup, SetSlider, SliderSize,
    read_slider_presets, write_slider_presets,
};
