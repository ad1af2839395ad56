//! Fixed set of selectable icons.

use serde::{Deserialize, Serialize};

use crate::model::IconRef;

/// Naming convention for the numbered icon files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory (URL path segment) holding the icon files.
    pub directory: String,
    /// File-name prefix before the two-digit index.
    pub prefix: String,
    /// File extension without the dot.
    pub extension: String,
    /// Number of icons; indices run `1..=count`.
    pub count: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            directory: "icons".to_string(),
            prefix: "Icon_".to_string(),
            extension: "png".to_string(),
            count: 9,
        }
    }
}

/// Enumerable list of catalog icons. Catalog icons are inexhaustible drag sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    icons: Vec<IconRef>,
}

impl AssetCatalog {
    /// Builds `{directory}/{prefix}{index:02}.{extension}` for each index.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let icons = (1..=config.count)
            .map(|index| {
                IconRef::new(format!(
                    "{}/{}{index:02}.{}",
                    config.directory.trim_end_matches('/'),
                    config.prefix,
                    config.extension
                ))
            })
            .collect();
        Self { icons }
    }

    /// Wraps an explicit icon list.
    pub fn from_icons(icons: Vec<IconRef>) -> Self {
        Self { icons }
    }

    /// Icons in display order.
    pub fn icons(&self) -> &[IconRef] {
        &self.icons
    }

    /// Returns whether `icon` is part of the catalog.
    pub fn contains(&self, icon: &IconRef) -> bool {
        self.icons.contains(icon)
    }

    /// Number of icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_catalog_lists_nine_numbered_icons() {
        let catalog = AssetCatalog::default();

        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.icons()[0].as_str(), "icons/Icon_01.png");
        assert_eq!(catalog.icons()[8].as_str(), "icons/Icon_09.png");
        assert!(catalog.icons().iter().all(|icon| !icon.is_default()));
    }

    #[test]
    fn catalog_index_is_zero_padded_past_nine() {
        let catalog = AssetCatalog::from_config(&CatalogConfig {
            directory: "assets/icons/".to_string(),
            prefix: "glyph-".to_string(),
            extension: "svg".to_string(),
            count: 12,
        });

        assert_eq!(catalog.icons()[9].as_str(), "assets/icons/glyph-10.svg");
        assert!(catalog.contains(&IconRef::new("assets/icons/glyph-03.svg")));
        assert!(!catalog.contains(&IconRef::new("assets/icons/glyph-13.svg")));
    }
}
