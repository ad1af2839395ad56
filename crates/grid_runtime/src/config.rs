//! Build-time widget configuration and entry-level overrides.

use grid_core::{CatalogConfig, GridDimensions};
use serde::Deserialize;
use thiserror::Error;
use widget_app_music_player::PlaylistConfig;

include!(concat!(env!("OUT_DIR"), "/widget_config_generated.rs"));

const FALLBACK_DIMENSIONS: (u32, u32) = (3, 3);
const FALLBACK_GRID: GridDimensions =
    match GridDimensions::new(FALLBACK_DIMENSIONS.0, FALLBACK_DIMENSIONS.1) {
        Some(dimensions) => dimensions,
        None => panic!("fallback dimensions must be positive"),
    };

/// Initial grid shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GridDefaults {
    /// Rows rendered on first load.
    pub default_rows: u32,
    /// Columns rendered on first load.
    pub default_cols: u32,
}

impl Default for GridDefaults {
    fn default() -> Self {
        Self {
            default_rows: FALLBACK_DIMENSIONS.0,
            default_cols: FALLBACK_DIMENSIONS.1,
        }
    }
}

/// Parsed `widget.config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WidgetConfig {
    /// Initial grid shape.
    pub grid: GridDefaults,
    /// Icon catalog naming.
    pub catalog: CatalogConfig,
    /// Playlist discovery and transport defaults.
    pub playlist: PlaylistConfig,
}

/// Failure to decode the embedded configuration payload.
#[derive(Debug, Error)]
pub enum WidgetConfigError {
    /// The generated JSON did not match [`WidgetConfig`].
    #[error("embedded widget config is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Default dimensions were not positive.
    #[error("embedded widget config has invalid default grid {rows}x{cols}")]
    InvalidDimensions {
        /// Configured rows.
        rows: u32,
        /// Configured columns.
        cols: u32,
    },
}

impl WidgetConfig {
    /// Decodes a configuration payload in the generated JSON shape.
    pub fn from_json(raw: &str) -> Result<Self, WidgetConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.initial_dimensions()?;
        Ok(config)
    }

    /// Configured initial grid dimensions.
    pub fn initial_dimensions(&self) -> Result<GridDimensions, WidgetConfigError> {
        let GridDefaults {
            default_rows: rows,
            default_cols: cols,
        } = self.grid;
        GridDimensions::new(rows, cols).ok_or(WidgetConfigError::InvalidDimensions { rows, cols })
    }

    /// Initial dimensions, replaced by `rows`/`cols` overrides when both parse as a valid shape.
    ///
    /// Overrides go through the same parser as the Apply control.
    pub fn resolve_dimensions(&self, rows: Option<&str>, cols: Option<&str>) -> GridDimensions {
        let configured = self.initial_dimensions().unwrap_or(FALLBACK_GRID);
        match (rows, cols) {
            (Some(rows), Some(cols)) => GridDimensions::from_inputs(rows, cols).unwrap_or(configured),
            _ => configured,
        }
    }
}

/// Returns the raw generated configuration JSON.
pub fn widget_config_json() -> &'static str {
    WIDGET_CONFIG_JSON
}

/// Loads the configuration embedded at build time.
///
/// `build.rs` already rejects invalid files, so a decode failure here indicates a mismatch between
/// the build script and [`WidgetConfig`]; the crate defaults are used in that case.
pub fn load_widget_config() -> WidgetConfig {
    match WidgetConfig::from_json(WIDGET_CONFIG_JSON) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("{err}; using built-in defaults");
            WidgetConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_decodes_with_checked_in_values() {
        let config = WidgetConfig::from_json(widget_config_json()).expect("embedded config");

        assert_eq!(config.grid, GridDefaults::default());
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.playlist, PlaylistConfig::default());
    }

    #[test]
    fn query_overrides_need_both_valid_values() {
        let config = WidgetConfig::default();
        let expect = |rows, cols| GridDimensions::new(rows, cols).expect("dimensions");

        assert_eq!(
            config.resolve_dimensions(Some("4"), Some("5px")),
            expect(4, 5)
        );
        assert_eq!(config.resolve_dimensions(Some("4"), None), expect(3, 3));
        assert_eq!(
            config.resolve_dimensions(Some("0"), Some("5")),
            expect(3, 3)
        );
        assert_eq!(
            config.resolve_dimensions(Some("abc"), Some("2")),
            expect(3, 3)
        );
    }

    #[test]
    fn malformed_payload_is_reported() {
        assert!(matches!(
            WidgetConfig::from_json("{}"),
            Err(WidgetConfigError::Malformed(_))
        ));

        let zero_rows = widget_config_json().replacen("\"default_rows\": 3", "\"default_rows\": 0", 1);
        assert!(matches!(
            WidgetConfig::from_json(&zero_rows),
            Err(WidgetConfigError::InvalidDimensions { rows: 0, cols: 3 })
        ));
    }
}
