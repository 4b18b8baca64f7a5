//! CLI command for listing the sliders of a preset

use std::path::Path;

use crate::converter::{jslot_to_slider_presets, preset_base_name};
use crate::formats::jslot::read_jslot;
use crate::formats::slider_preset::{SliderPresets, SliderSize, read_slider_presets};

pub fn execute(source: &Path, count: bool) -> anyhow::Result<()> {
    let is_xml = source
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"));

    let presets = if is_xml {
        read_slider_presets(source)?
    } else {
        let Some(doc) = read_jslot(source)? else {
            anyhow::bail!("File not found: {}", source.display());
        };
        jslot_to_slider_presets(&doc, &preset_base_name(source)?)?
    };

    print_presets(&presets, count);
    Ok(())
}

fn print_presets(presets: &SliderPresets, count: bool) {
    for preset in &presets.presets {
        // Sliders come in small/big pairs; count the morphs behind them
        let morphs = preset
            .sliders
            .iter()
            .filter(|s| s.size == SliderSize::Small)
            .count();

        println!("{} (set: {})", preset.name, preset.set);
        if count {
            println!("  {} sliders ({morphs} morphs)", preset.sliders.len());
            continue;
        }

        let groups: Vec<_> = preset.groups.iter().map(|g| g.name.as_str()).collect();
        println!("  Groups: {}", groups.join(", "));

        let width = preset.sliders.iter().map(|s| s.name.len()).max().unwrap_or(0);
        for slider in &preset.sliders {
            println!(
                "  {:width$}  {:5}  {}",
                slider.name,
                slider.size.as_str(),
                slider.value_string()
            );
        }
        println!("  {} sliders ({morphs} morphs)", preset.sliders.len());
    }
}
