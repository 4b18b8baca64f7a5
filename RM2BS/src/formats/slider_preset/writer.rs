//! Slider preset XML writing

use super::document::{Preset, SliderPresets};
use crate::error::{Error, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write a slider preset document to disk
///
/// The XML is staged in a temporary file next to `path` and only moved into
/// place once fully written, so a failed write never leaves a partial preset.
/// An existing file at `path` is never replaced.
///
/// # Errors
/// Returns [`Error::OutputExists`] if `path` already exists, or an IO/XML
/// error if serialization or writing fails.
pub fn write_slider_presets<P: AsRef<Path>>(doc: &SliderPresets, path: P) -> Result<()> {
    let path = path.as_ref();
    let xml = serialize_slider_presets(doc)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(xml.as_bytes())?;
    staged.as_file().sync_all()?;

    match staged.persist_noclobber(path) {
        Ok(_) => Ok(()),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Err(Error::OutputExists {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Serialize a slider preset document to an XML string
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_slider_presets(doc: &SliderPresets) -> Result<String> {
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    // <SliderPresets>
    writer.write_event(Event::Start(BytesStart::new("SliderPresets")))?;
    for preset in &doc.presets {
        write_preset(&mut writer, preset)?;
    }
    writer.write_event(Event::End(BytesEnd::new("SliderPresets")))?;

    let mut xml = String::from_utf8(output)?;
    xml.push('\n');
    Ok(xml)
}

fn write_preset<W: Write>(writer: &mut Writer<W>, preset: &Preset) -> Result<()> {
    let mut preset_tag = BytesStart::new("Preset");
    preset_tag.push_attribute(("name", preset.name.as_str()));
    preset_tag.push_attribute(("set", preset.set.as_str()));

    if preset.groups.is_empty() && preset.sliders.is_empty() {
        writer.write_event(Event::Empty(preset_tag))?;
        return Ok(());
    }

    writer.write_event(Event::Start(preset_tag.borrow()))?;

    for group in &preset.groups {
        let mut group_tag = BytesStart::new("Group");
        group_tag.push_attribute(("name", group.name.as_str()));
        writer.write_event(Event::Empty(group_tag))?;
    }

    for slider in &preset.sliders {
        let value = slider.value_string();
        let mut slider_tag = BytesStart::new("SetSlider");
        slider_tag.push_attribute(("name", slider.name.as_str()));
        slider_tag.push_attribute(("size", slider.size.as_str()));
        slider_tag.push_attribute(("value", value.as_str()));
        writer.write_event(Event::Empty(slider_tag))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Preset")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::slider_preset::{PresetGroup, SetSlider, SliderSize};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn sample() -> SliderPresets {
        SliderPresets {
            presets: vec![Preset {
                name: "RaceMenu - Lydia".to_string(),
                set: "RaceMenu".to_string(),
                groups: vec![PresetGroup::new("3BA"), PresetGroup::new("CBBE bodies")],
                sliders: vec![
                    SetSlider {
                        name: "BreastSize".to_string(),
                        size: SliderSize::Small,
                        value: Decimal::new(300, 1),
                    },
                    SetSlider {
                        name: "BreastSize".to_string(),
                        size: SliderSize::Big,
                        value: Decimal::new(300, 1),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_serialize_layout() {
        let xml = serialize_slider_presets(&sample()).unwrap();
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n",
            "<SliderPresets>\n",
            "  <Preset name=\"RaceMenu - Lydia\" set=\"RaceMenu\">\n",
            "    <Group name=\"3BA\"/>\n",
            "    <Group name=\"CBBE bodies\"/>\n",
            "    <SetSlider name=\"BreastSize\" size=\"small\" value=\"30\"/>\n",
            "    <SetSlider name=\"BreastSize\" size=\"big\" value=\"30\"/>\n",
            "  </Preset>\n",
            "</SliderPresets>\n",
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut doc = sample();
        doc.presets[0].name = "RaceMenu - Tom & \"Jerry\"".to_string();
        let xml = serialize_slider_presets(&doc).unwrap();
        assert!(xml.contains("name=\"RaceMenu - Tom &amp; &quot;Jerry&quot;\""));
    }

    #[test]
    fn test_write_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lydia.xml");
        std::fs::write(&path, "keep me").unwrap();

        let result = write_slider_presets(&sample(), &path);
        assert!(matches!(result, Err(Error::OutputExists { .. })));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_write_leaves_no_staging_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lydia.xml");
        write_slider_presets(&sample(), &path).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            serialize_slider_presets(&sample()).unwrap()
        );
    }
}
