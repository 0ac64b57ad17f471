// build.rs
use std::{env, fs, path::PathBuf};

use constants::galaxy;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Regenerate the shipped default preset so it always matches the
    // built-in constants.
    let preset = serde_json::json!({
        "count": galaxy::DEFAULT_COUNT,
        "size": galaxy::DEFAULT_SIZE,
        "branch_count": galaxy::DEFAULT_BRANCH_COUNT,
        "radius": galaxy::DEFAULT_RADIUS,
        "spin": galaxy::DEFAULT_SPIN,
        "randomness": galaxy::DEFAULT_RANDOMNESS,
        "randomness_power": galaxy::DEFAULT_RANDOMNESS_POWER,
        "inside_colour": galaxy::DEFAULT_INSIDE_COLOUR,
        "outside_colour": galaxy::DEFAULT_OUTSIDE_COLOUR,
    });

    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo"),
    );
    let preset_dir = manifest_dir.join("assets").join("presets");
    fs::create_dir_all(&preset_dir).expect("Failed to create assets/presets");

    let json_content =
        serde_json::to_string_pretty(&preset).expect("Failed to serialise default preset");
    fs::write(preset_dir.join("default.galaxy.json"), json_content)
        .expect("Failed to write default.galaxy.json to assets");
}
