//! BodySlide slider preset document structures

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A `<SliderPresets>` document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderPresets {
    /// `<Preset>` elements in document order.
    pub presets: Vec<Preset>,
}

/// A single `<Preset>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Display name shown in BodySlide.
    pub name: String,
    /// Slider set the preset belongs to.
    pub set: String,
    /// `<Group>` memberships.
    pub groups: Vec<PresetGroup>,
    /// `<SetSlider>` entries.
    pub sliders: Vec<SetSlider>,
}

/// A `<Group name="..."/>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetGroup {
    pub name: String,
}

impl PresetGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A `<SetSlider name=".." size=".." value=".."/>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSlider {
    /// Slider (morph) name.
    pub name: String,
    /// Body weight variant this value applies to.
    pub size: SliderSize,
    /// Slider value in BodySlide units (percent).
    pub value: Decimal,
}

impl SetSlider {
    /// The `value` attribute text: plain decimal, no trailing zeros.
    #[must_use]
    pub fn value_string(&self) -> String {
        self.value.normalize().to_string()
    }
}

/// Slider size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderSize {
    Small,
    Big,
}

impl SliderSize {
    /// Both sizes in output order.
    pub const ALL: [SliderSize; 2] = [SliderSize::Small, SliderSize::Big];

    /// Attribute text for this size.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Big => "big",
        }
    }
}

impl fmt::Display for SliderSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SliderSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "small" => Ok(Self::Small),
            "big" => Ok(Self::Big),
            other => Err(Error::InvalidSliderSize(other.to_string())),
        }
    }
}
