//! jslot (RaceMenu JSON preset) format module

mod document;
mod reader;

pub use document::{ActorInfo, BodyMorph, JslotDocument, MorphKey};
pub use reader::{parse_jslot, read_jslot};
