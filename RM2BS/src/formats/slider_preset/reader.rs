//! Slider preset XML reading

use super::document::{Preset, PresetGroup, SetSlider, SliderPresets, SliderSize};
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Read a slider preset XML file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid preset document.
pub fn read_slider_presets<P: AsRef<Path>>(path: P) -> Result<SliderPresets> {
    let content = fs::read_to_string(path)?;
    parse_slider_presets(&content)
}

/// Parse a slider preset document from an XML string
///
/// # Errors
/// Returns an error if the XML is malformed or has an invalid structure.
pub fn parse_slider_presets(content: &str) -> Result<SliderPresets> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut doc = SliderPresets::default();
    let mut saw_root = false;
    let mut current: Option<Preset> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"SliderPresets" => saw_root = true,
                b"Preset" => current = Some(read_preset_start(&e)?),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"SliderPresets" => saw_root = true,
                b"Preset" => doc.presets.push(read_preset_start(&e)?),
                b"Group" => {
                    let preset = current.as_mut().ok_or_else(|| {
                        Error::InvalidFormat("<Group> outside of <Preset>".to_string())
                    })?;
                    preset.groups.push(PresetGroup::new(required_attr(&e, "name")?));
                }
                b"SetSlider" => {
                    let preset = current.as_mut().ok_or_else(|| {
                        Error::InvalidFormat("<SetSlider> outside of <Preset>".to_string())
                    })?;
                    preset.sliders.push(read_slider(&e)?);
                }
                _ => {}
            },
            Event::End(e) => {
                if e.name().as_ref() == b"Preset" {
                    if let Some(preset) = current.take() {
                        doc.presets.push(preset);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(Error::InvalidFormat(
            "missing <SliderPresets> root element".to_string(),
        ));
    }

    Ok(doc)
}

fn read_preset_start(e: &BytesStart) -> Result<Preset> {
    Ok(Preset {
        name: required_attr(e, "name")?,
        set: required_attr(e, "set")?,
        groups: Vec::new(),
        sliders: Vec::new(),
    })
}

fn read_slider(e: &BytesStart) -> Result<SetSlider> {
    let name = required_attr(e, "name")?;
    let size = SliderSize::from_str(&required_attr(e, "size")?)?;
    let raw_value = required_attr(e, "value")?;
    let value = Decimal::from_str(&raw_value).map_err(|err| {
        Error::InvalidFormat(format!("slider '{name}' has invalid value '{raw_value}': {err}"))
    })?;
    Ok(SetSlider { name, size, value })
}

fn required_attr(e: &BytesStart, key: &str) -> Result<String> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key.as_bytes() {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(Error::InvalidFormat(format!(
        "<{}> is missing the '{key}' attribute",
        String::from_utf8_lossy(e.name().as_ref())
    )))
}
