//! jslot to BodySlide slider preset conversion
//!
//! Every morph whose first key comes from `RaceMenuMorphsCBBE.esp` becomes a
//! pair of `SetSlider` entries (small, then big) carrying the morph value
//! scaled from RaceMenu's 0-1 range to BodySlide's 0-100 range.

use crate::error::{Error, Result};
use crate::formats::jslot::{self, BodyMorph, JslotDocument};
use crate::formats::slider_preset::{
    self, Preset, PresetGroup, SetSlider, SliderPresets, SliderSize,
};

use rust_decimal::Decimal;
use std::path::Path;

/// Key identifier of the morphs that map onto BodySlide sliders.
pub const CBBE_MORPH_KEY: &str = "RaceMenuMorphsCBBE.esp";

/// Slider set every generated preset belongs to.
pub const PRESET_SET: &str = "RaceMenu";

/// Prefix of every generated preset name.
pub const PRESET_NAME_PREFIX: &str = "RaceMenu - ";

/// BodySlide groups every generated preset is listed under.
pub const PRESET_GROUPS: [&str; 6] = [
    "3BA",
    "3BBB",
    "BHUNP 3BBB",
    "CBBE bodies",
    "COCO CBBE 3BBB",
    "COCO UUNP 3BBB",
];

/// Base name of a jslot file: the file name without its extension.
///
/// # Errors
/// Returns [`Error::InvalidPath`] if the path has no UTF-8 file stem.
pub fn preset_base_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidPath(path.display().to_string()))
}

/// Build the slider preset for a jslot document
///
/// # Errors
/// Returns [`Error::SliderValueOverflow`] if a morph value cannot be scaled.
pub fn jslot_to_preset(doc: &JslotDocument, base_name: &str) -> Result<Preset> {
    let mut sliders = Vec::new();
    for morph in &doc.body_morphs {
        push_morph_sliders(&mut sliders, morph)?;
    }

    Ok(Preset {
        name: format!("{PRESET_NAME_PREFIX}{base_name}"),
        set: PRESET_SET.to_string(),
        groups: PRESET_GROUPS.iter().copied().map(PresetGroup::new).collect(),
        sliders,
    })
}

/// Build a complete `<SliderPresets>` document holding one preset
///
/// # Errors
/// Returns an error if the preset cannot be built.
pub fn jslot_to_slider_presets(doc: &JslotDocument, base_name: &str) -> Result<SliderPresets> {
    Ok(SliderPresets {
        presets: vec![jslot_to_preset(doc, base_name)?],
    })
}

fn push_morph_sliders(sliders: &mut Vec<SetSlider>, morph: &BodyMorph) -> Result<()> {
    let Some(key) = morph.first_key() else {
        return Ok(());
    };
    if key.key != CBBE_MORPH_KEY {
        return Ok(());
    }

    let value = key
        .value
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(|| Error::SliderValueOverflow {
            morph: morph.name.clone(),
        })?;

    sliders.extend(SliderSize::ALL.iter().map(|&size| SetSlider {
        name: morph.name.clone(),
        size,
        value,
    }));
    Ok(())
}

/// Convert a .jslot file to a slider preset .xml file
///
/// # Errors
/// Returns an error if the source is missing or invalid, the destination
/// already exists, or writing fails.
pub fn convert_jslot_to_xml<P: AsRef<Path>>(source: P, dest: P) -> Result<()> {
    convert_jslot_to_xml_with_progress(source, dest, &|_| {})
}

/// Convert a .jslot file to a slider preset .xml file with progress callback
///
/// # Errors
/// Returns an error if the source is missing or invalid, the destination
/// already exists, or writing fails.
pub fn convert_jslot_to_xml_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    progress: super::ProgressCallback,
) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    tracing::info!("Converting jslot→XML: {:?} → {:?}", source, dest);

    if dest.exists() {
        return Err(Error::OutputExists {
            path: dest.to_path_buf(),
        });
    }

    progress("Reading jslot file...");
    let doc = jslot::read_jslot(source)?.ok_or_else(|| Error::NoJslotData {
        path: source.to_path_buf(),
    })?;

    progress(&format!("Converting {} body morphs...", doc.body_morphs.len()));
    let base_name = preset_base_name(source)?;
    let presets = jslot_to_slider_presets(&doc, &base_name)?;

    progress("Writing slider preset...");
    slider_preset::write_slider_presets(&presets, dest)?;

    tracing::info!("Conversion complete");
    Ok(())
}
