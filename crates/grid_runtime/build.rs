use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridSection {
    default_rows: u32,
    default_cols: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogSection {
    directory: String,
    prefix: String,
    extension: String,
    count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlaylistSection {
    base_path: String,
    first_index: u32,
    last_index: u32,
    extensions: Vec<String>,
    fallback: String,
    repeat: bool,
    shuffle: bool,
    initial_volume: u8,
    restart_threshold_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WidgetConfigFile {
    schema_version: u32,
    grid: GridSection,
    catalog: CatalogSection,
    playlist: PlaylistSection,
}

fn validate(config: &WidgetConfigFile, path: &str) {
    if config.schema_version != 1 {
        panic!(
            "widget config schema mismatch in {path}: expected 1 found {}",
            config.schema_version
        );
    }
    if config.grid.default_rows == 0 || config.grid.default_cols == 0 {
        panic!(
            "invalid default grid {}x{} in {path}: both sides must be positive",
            config.grid.default_rows, config.grid.default_cols
        );
    }
    if config.catalog.count == 0 {
        panic!("catalog in {path} must contain at least one icon");
    }
    if config.catalog.count > 99 {
        panic!(
            "catalog in {path} declares {} icons; file names carry two-digit indices",
            config.catalog.count
        );
    }
    if config.playlist.extensions.is_empty() {
        panic!("playlist in {path} must list at least one extension");
    }
    if config.playlist.first_index > config.playlist.last_index {
        panic!(
            "playlist probe range in {path} is empty: {}..={}",
            config.playlist.first_index, config.playlist.last_index
        );
    }
    if config.playlist.initial_volume > 100 {
        panic!(
            "playlist initial_volume in {path} must be within 0..=100, found {}",
            config.playlist.initial_volume
        );
    }
    if !config.playlist.restart_threshold_secs.is_finite()
        || config.playlist.restart_threshold_secs < 0.0
    {
        panic!("playlist restart_threshold_secs in {path} must be a non-negative number");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("widget.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: WidgetConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&config, &path.display().to_string());

    let json = serde_json::to_string_pretty(&config).expect("serialize widget config");
    let generated = format!(
        "/// Build-time generated widget configuration JSON.\n\
pub const WIDGET_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("widget_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
