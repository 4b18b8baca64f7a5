//! BodySlide slider preset (XML) format module
//!
//! Layout consumed by BodySlide:
//!
//! ```xml
//! <SliderPresets>
//!   <Preset name="..." set="...">
//!     <Group name="..."/>
//!     <SetSlider name="..." size="small|big" value="..."/>
//!   </Preset>
//! </SliderPresets>
//! ```

mod document;
mod reader;
mod writer;

pub use document::{Preset, PresetGroup, SetSlider, SliderPresets, SliderSize};
pub use reader::{parse_slider_presets, read_slider_presets};
pub use writer::{serialize_slider_presets, write_slider_presets};
