//! Catalog Configuration
//!
//! Grid breakpoints, price bounds, storage keys and limits. Every field has a
//! default so a partial JSON document is enough.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    /// Applies to viewport widths strictly below this value
    pub max_width: u32,
    pub items_per_row: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    pub breakpoints: Vec<Breakpoint>,
    /// Used at and above the last breakpoint
    pub wide_items_per_row: usize,
    pub preview_rows: usize,
    pub listing_rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoints: vec![
                Breakpoint { max_width: 640, items_per_row: 3 },
                Breakpoint { max_width: 1024, items_per_row: 4 },
                Breakpoint { max_width: 1280, items_per_row: 5 },
            ],
            wide_items_per_row: 6,
            preview_rows: 5,
            listing_rows: 7,
        }
    }
}

impl GridConfig {
    /// Step function of viewport width
    pub fn items_per_row(&self, viewport_width: u32) -> usize {
        self.breakpoints
            .iter()
            .find(|bp| viewport_width < bp.max_width)
            .map(|bp| bp.items_per_row)
            .unwrap_or(self.wide_items_per_row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self { min: 0, max: 500_000, step: 1_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub favorites: String,
    pub recent_searches: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            favorites: "favorites".to_string(),
            recent_searches: "recentSearches".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    pub grid: GridConfig,
    pub price_range: PriceBounds,
    pub recent_searches_cap: usize,
    pub storage_keys: StorageKeys,
    pub currency_prefix: String,
    /// Commit price range on every drag step instead of on release
    pub live_price_updates: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            price_range: PriceBounds::default(),
            recent_searches_cap: 8,
            storage_keys: StorageKeys::default(),
            currency_prefix: "Rs.".to_string(),
            live_price_updates: false,
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if grid.breakpoints.is_empty() {
            return Err(ConfigError::Invalid("grid.breakpoints must not be empty".into()));
        }
        if grid.breakpoints.windows(2).any(|w| w[0].max_width >= w[1].max_width) {
            return Err(ConfigError::Invalid("grid.breakpoints must be strictly ascending".into()));
        }
        if grid.breakpoints.iter().any(|bp| bp.items_per_row == 0)
            || grid.wide_items_per_row == 0
            || grid.preview_rows == 0
            || grid.listing_rows == 0
        {
            return Err(ConfigError::Invalid("grid sizes must be positive".into()));
        }
        let range = &self.price_range;
        if range.step == 0 || range.max <= range.min || range.max - range.min < range.step {
            return Err(ConfigError::Invalid(format!(
                "price range {}..{} step {} is empty",
                range.min, range.max, range.step
            )));
        }
        if self.recent_searches_cap == 0 {
            return Err(ConfigError::Invalid("recentSearchesCap must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_row_breakpoints() {
        let grid = GridConfig::default();
        assert_eq!(grid.items_per_row(375), 3);
        assert_eq!(grid.items_per_row(639), 3);
        assert_eq!(grid.items_per_row(640), 4);
        assert_eq!(grid.items_per_row(1100), 5);
        assert_eq!(grid.items_per_row(1280), 6);
        assert_eq!(grid.items_per_row(2560), 6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CatalogConfig::from_json_str(r#"{ "recentSearchesCap": 5 }"#).unwrap();
        assert_eq!(config.recent_searches_cap, 5);
        assert_eq!(config.grid, GridConfig::default());
        assert_eq!(config.storage_keys.favorites, "favorites");
    }

    #[test]
    fn test_rejects_unordered_breakpoints() {
        let json = r#"{ "grid": { "breakpoints": [
            { "maxWidth": 1024, "itemsPerRow": 4 },
            { "maxWidth": 640, "itemsPerRow": 3 }
        ] } }"#;
        assert!(matches!(CatalogConfig::from_json_str(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_step() {
        let json = r#"{ "priceRange": { "min": 0, "max": 100, "step": 0 } }"#;
        assert!(CatalogConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(CatalogConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
    }
}
