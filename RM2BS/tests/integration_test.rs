use pretty_assertions::assert_eq;
use rm2bs::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const TEST_JSLOT: &str = r#"{"bodyMorphs":[{"name":"BreastSize","keys":[{"key":"RaceMenuMorphsCBBE.esp","value":0.3}]},{"name":"Other","keys":[{"key":"SomethingElse","value":0.9}]}]}"#;

const TEST_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<SliderPresets>
  <Preset name="RaceMenu - Test" set="RaceMenu">
    <Group name="3BA"/>
    <Group name="3BBB"/>
    <Group name="BHUNP 3BBB"/>
    <Group name="CBBE bodies"/>
    <Group name="COCO CBBE 3BBB"/>
    <Group name="COCO UUNP 3BBB"/>
    <SetSlider name="BreastSize" size="small" value="30"/>
    <SetSlider name="BreastSize" size="big" value="30"/>
  </Preset>
</SliderPresets>
"#;

fn write_jslot(config: &BatchConfig, name: &str, content: &str) {
    fs::create_dir_all(&config.input_dir).unwrap();
    fs::write(config.input_dir.join(format!("{name}.jslot")), content).unwrap();
}

#[test]
fn test_batch_end_to_end() {
    let root = tempdir().unwrap();
    let config = BatchConfig::from_root(root.path());
    write_jslot(&config, "Test", TEST_JSLOT);

    let result = convert_directory(&config).unwrap();
    let output = root.path().join("CalienteTools/BodySlide/SliderPresets/Test.xml");

    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.reports[0].outcome, FileOutcome::Created(output.clone()));
    assert_eq!(fs::read_to_string(&output).unwrap(), TEST_XML);

    let presets = rm2bs::formats::read_slider_presets(&output).unwrap();
    assert_eq!(presets.presets.len(), 1);
    let preset = &presets.presets[0];
    assert_eq!(preset.name, "RaceMenu - Test");
    assert_eq!(preset.groups.len(), 6);
    assert!(preset.sliders.iter().all(|s| s.name == "BreastSize"));
}

#[test]
fn test_second_run_writes_nothing() {
    let root = tempdir().unwrap();
    let config = BatchConfig::from_root(root.path());
    write_jslot(&config, "Test", TEST_JSLOT);

    convert_directory(&config).unwrap();
    let output = config.output_path_for("Test");
    let first = fs::read_to_string(&output).unwrap();
    let first_modified = fs::metadata(&output).unwrap().modified().unwrap();

    // Changing the source must not touch an existing preset
    write_jslot(&config, "Test", r#"{"bodyMorphs":[]}"#);
    let result = convert_directory(&config).unwrap();

    assert_eq!(result.skipped(), 1);
    assert_eq!(result.created(), 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), first);
    assert_eq!(
        fs::metadata(&output).unwrap().modified().unwrap(),
        first_modified
    );
}

#[test]
fn test_invalid_inputs_create_nothing() {
    let root = tempdir().unwrap();
    let config = BatchConfig::from_root(root.path());
    write_jslot(&config, "Garbage", "this is not json");
    write_jslot(&config, "WrongShape", r#"{"morphs": []}"#);
    write_jslot(&config, "Empty", "");

    let result = convert_directory(&config).unwrap();

    assert_eq!(result.invalid(), 3);
    assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 0);
}

#[test]
fn test_nonexistent_jslot_is_no_data() {
    let dir = tempdir().unwrap();
    assert!(read_jslot(dir.path().join("Missing.jslot")).unwrap().is_none());

    let result = convert_jslot_to_xml(dir.path().join("Missing.jslot"), dir.path().join("Missing.xml"));
    assert!(matches!(result, Err(Error::NoJslotData { .. })));
    assert!(!dir.path().join("Missing.xml").exists());
}

#[test]
fn test_single_file_conversion() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("Test.jslot");
    let dest = dir.path().join("Test.xml");
    fs::write(&source, TEST_JSLOT).unwrap();

    convert_jslot_to_xml(&source, &dest).unwrap();
    assert_eq!(fs::read_to_string(&dest).unwrap(), TEST_XML);

    // Refuses to overwrite
    let again = convert_jslot_to_xml(&source, &dest);
    assert!(matches!(again, Err(Error::OutputExists { .. })));
}

#[test]
fn test_zero_morphs_still_has_groups() {
    let doc = rm2bs::formats::parse_jslot(r#"{"actor":{"hairColor":0,"headTexture":"","weight":100},"bodyMorphs":[]}"#)
        .unwrap();
    let preset = jslot_to_preset(&doc, "Bare").unwrap();

    assert_eq!(preset.name, "RaceMenu - Bare");
    assert_eq!(preset.groups.len(), 6);
    assert!(preset.sliders.is_empty());
}

#[test]
fn test_output_directory_is_created() {
    let root = tempdir().unwrap();
    let config = BatchConfig::from_root(root.path());
    write_jslot(&config, "Test", TEST_JSLOT);
    assert!(!Path::new(&config.output_dir).exists());

    convert_directory(&config).unwrap();
    assert!(config.output_dir.is_dir());
}
