//! jslot document structures
//!
//! RaceMenu stores a character preset as JSON. Only the body morph
//! section is needed for slider presets; everything else is ignored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A RaceMenu character preset (`.jslot`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JslotDocument {
    /// Actor appearance, absent in some presets.
    #[serde(rename = "actor", default, skip_serializing_if = "Option::is_none")]
    pub actor_info: Option<ActorInfo>,
    /// Body morphs in file order.
    #[serde(rename = "bodyMorphs")]
    pub body_morphs: Vec<BodyMorph>,
}

/// Actor appearance values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorInfo {
    /// Packed hair color.
    #[serde(rename = "hairColor")]
    pub hair_color: Decimal,
    /// Head texture set identifier.
    #[serde(rename = "headTexture")]
    pub head_texture: String,
    /// Actor weight (0-100).
    pub weight: Decimal,
}

/// A named body morph and the plugin keys that set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyMorph {
    /// Morph (slider) name, e.g. `BreastSize`.
    pub name: String,
    /// Keys in file order.
    pub keys: Vec<MorphKey>,
}

impl BodyMorph {
    /// The key that decides this morph's value. Later keys are not consulted.
    #[must_use]
    pub fn first_key(&self) -> Option<&MorphKey> {
        self.keys.first()
    }
}

/// One key/value pair of a body morph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphKey {
    /// Key identifier, usually the plugin that registered the morph.
    pub key: String,
    /// Morph strength.
    pub value: Decimal,
}
