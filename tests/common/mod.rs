//! Common test utilities

use std::path::{Path, PathBuf};

/// Write a settings file that keeps the palette library inside `dir`
pub fn write_settings(dir: &Path, extra: &str) -> PathBuf {
    let library = dir.join("palettes.json");
    let extra = if extra.is_empty() {
        String::new()
    } else {
        format!(", {}", extra)
    };
    let body = format!(
        "{{ \"library_path\": {}{} }}",
        serde_json::to_string(&library.to_string_lossy()).unwrap(),
        extra
    );
    let path = dir.join("luxwheel.json");
    std::fs::write(&path, body).unwrap();
    path
}

/// Parse `generate --json` output into (hue, saturation, lightness) triples
pub fn parse_palette_json(stdout: &str) -> Vec<[f64; 3]> {
    serde_json::from_str(stdout).expect("stdout should be a JSON palette")
}

/// Extract the id from "Saved 'NAME' (N colors) as ID"
pub fn saved_id(stdout: &str) -> String {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Saved ").and_then(|rest| rest.rsplit(" as ").next()))
        .expect("save output should contain an id")
        .trim()
        .to_string()
}
