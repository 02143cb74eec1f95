//! Filter Engine
//!
//! Three stages over the catalog:
//! 1. hard filter: category match and case-insensitive name substring
//! 2. soft filters from [`FilterState`], AND across keys, OR within a multi-select key
//! 3. optional ordering via [`SortStrategy`]
//!
//! Inputs are never mutated; the result is a fresh vector.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::{CatalogConfig, PriceBounds};
use crate::format::format_price;
use crate::item::{Category, Item};
use crate::sort::{sort_items, SortStrategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Single,
    Multi,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    Brand,
    PriceRange,
    Ram,
    Storage,
    Camera,
    Battery,
    Network,
}

impl FilterKey {
    pub const ALL: [FilterKey; 7] = [
        FilterKey::Brand,
        FilterKey::PriceRange,
        FilterKey::Ram,
        FilterKey::Storage,
        FilterKey::Camera,
        FilterKey::Battery,
        FilterKey::Network,
    ];

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterKey::Brand => FilterKind::Single,
            FilterKey::PriceRange => FilterKind::Range,
            _ => FilterKind::Multi,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            FilterKey::Brand => "brand",
            FilterKey::PriceRange => "priceRange",
            FilterKey::Ram => "ram",
            FilterKey::Storage => "storage",
            FilterKey::Camera => "camera",
            FilterKey::Battery => "battery",
            FilterKey::Network => "network",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Brand => "Brand",
            FilterKey::PriceRange => "Price Range",
            FilterKey::Ram => "RAM",
            FilterKey::Storage => "Storage",
            FilterKey::Camera => "Camera",
            FilterKey::Battery => "Battery",
            FilterKey::Network => "Network",
        }
    }

    /// Numeric attribute used by range and bucket matching
    pub fn numeric_value(&self, item: &Item) -> Option<u32> {
        match self {
            FilterKey::PriceRange => Some(item.price),
            FilterKey::Ram => item.ram_gb(),
            FilterKey::Storage => item.storage_gb(),
            FilterKey::Camera => item.camera_mp(),
            FilterKey::Battery => item.battery_mah(),
            FilterKey::Brand | FilterKey::Network => None,
        }
    }

    fn text_value<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            FilterKey::Brand => Some(item.brand()),
            FilterKey::Network => item.network(),
            FilterKey::Ram => item.specs.ram.as_deref(),
            FilterKey::Storage => item.specs.storage.as_deref(),
            FilterKey::Camera => Some(item.specs.camera.as_str()),
            FilterKey::Battery => item.specs.battery.as_deref(),
            FilterKey::PriceRange => None,
        }
    }

    /// Whether `item` satisfies a single selected option value for this key.
    /// Items missing the attribute never match.
    pub fn matches_option(&self, item: &Item, value: &str) -> bool {
        match self {
            FilterKey::Brand | FilterKey::Network => self
                .text_value(item)
                .map_or(false, |text| normalize(text) == normalize(value)),
            _ => match OptionMatch::parse(value) {
                OptionMatch::Equals(expected) => self
                    .text_value(item)
                    .map_or(false, |text| normalize(text) == expected),
                bucket => self.numeric_value(item).map_or(false, |n| bucket.contains(n)),
            },
        }
    }
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parsed form of an option value such as `"8gb"`, `"under-48mp"` or `"3000-4000"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionMatch {
    Equals(String),
    Exact(u32),
    AtLeast(u32),
    Below(u32),
    /// Half-open `[lo, hi)` so adjacent buckets do not overlap
    Between(u32, u32),
}

impl OptionMatch {
    pub fn parse(value: &str) -> Self {
        let v = value.trim().to_ascii_lowercase();
        if let Some(n) = v.strip_prefix("under-").and_then(quantity) {
            return OptionMatch::Below(n);
        }
        if let Some(n) = v.strip_prefix("above-").and_then(quantity) {
            return OptionMatch::AtLeast(n);
        }
        if let Some(n) = v.strip_suffix("-plus").and_then(quantity) {
            return OptionMatch::AtLeast(n);
        }
        if let Some((lo, hi)) = v.split_once('-') {
            if let (Some(lo), Some(hi)) = (quantity(lo), quantity(hi)) {
                return OptionMatch::Between(lo.min(hi), lo.max(hi));
            }
        }
        match quantity(&v) {
            Some(n) => OptionMatch::Exact(n),
            None => OptionMatch::Equals(normalize(value)),
        }
    }

    pub fn contains(&self, n: u32) -> bool {
        match *self {
            OptionMatch::Equals(_) => false,
            OptionMatch::Exact(x) => n == x,
            OptionMatch::AtLeast(x) => n >= x,
            OptionMatch::Below(x) => n < x,
            OptionMatch::Between(lo, hi) => n >= lo && n < hi,
        }
    }
}

/// "512gb" -> 512, "1tb" -> 1024, "50mp" -> 50, "6000" -> 6000
fn quantity(text: &str) -> Option<u32> {
    const UNITS: [(&str, u32); 4] = [("mah", 1), ("tb", 1024), ("gb", 1), ("mp", 1)];
    let (digits, factor) = UNITS
        .iter()
        .find_map(|(unit, factor)| text.strip_suffix(unit).map(|d| (d, *factor)))
        .unwrap_or((text, 1));
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok()?.checked_mul(factor)
}

/// Inclusive numeric interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(a: u32, b: u32) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum FilterValue {
    Single(String),
    Multi(BTreeSet<String>),
    Range(PriceRange),
}

/// Active soft-filter selections; an absent key means no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    entries: BTreeMap<FilterKey, FilterValue>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FilterKey) -> Option<&FilterValue> {
        self.entries.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FilterKey, &FilterValue)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_selected(&self, key: FilterKey, value: &str) -> bool {
        match self.entries.get(&key) {
            Some(FilterValue::Single(v)) => v == value,
            Some(FilterValue::Multi(set)) => set.contains(value),
            _ => false,
        }
    }

    /// Dropdown selection: a repeated single-select choice clears the key, a
    /// multi-select choice toggles membership and the key disappears once empty.
    pub fn select_option(&mut self, key: FilterKey, value: &str) {
        match key.kind() {
            FilterKind::Single => {
                if self.is_selected(key, value) {
                    self.entries.remove(&key);
                } else {
                    self.entries.insert(key, FilterValue::Single(value.to_string()));
                }
            }
            FilterKind::Multi => {
                let mut set = match self.entries.remove(&key) {
                    Some(FilterValue::Multi(set)) => set,
                    _ => BTreeSet::new(),
                };
                if !set.remove(value) {
                    set.insert(value.to_string());
                }
                if !set.is_empty() {
                    self.entries.insert(key, FilterValue::Multi(set));
                }
            }
            FilterKind::Range => {
                debug!("[FILTER] Ignoring option {:?} for range key {}", value, key.id());
            }
        }
    }

    pub fn set_range(&mut self, key: FilterKey, range: PriceRange) {
        self.entries.insert(key, FilterValue::Range(range));
    }

    pub fn range(&self, key: FilterKey) -> Option<PriceRange> {
        match self.entries.get(&key) {
            Some(FilterValue::Range(range)) => Some(*range),
            _ => None,
        }
    }

    pub fn remove(&mut self, key: FilterKey) {
        self.entries.remove(&key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// AND across keys
    pub fn matches(&self, item: &Item) -> bool {
        self.entries.iter().all(|(key, value)| match value {
            FilterValue::Single(v) => key.matches_option(item, v),
            FilterValue::Multi(set) => {
                set.is_empty() || set.iter().any(|v| key.matches_option(item, v))
            }
            FilterValue::Range(range) => {
                key.numeric_value(item).map_or(false, |n| range.contains(n))
            }
        })
    }
}

/// Full pipeline: category + query, soft filters, then optional ordering
pub fn filter_items(
    items: &[Item],
    category: Category,
    query: &str,
    filters: &FilterState,
    sort: Option<&SortStrategy>,
) -> Vec<Item> {
    let needle = query.to_lowercase();
    let mut result: Vec<Item> = items
        .iter()
        .filter(|item| item.category == category)
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .filter(|item| filters.matches(item))
        .cloned()
        .collect();

    if let Some(strategy) = sort {
        sort_items(&mut result, strategy);
    }

    debug!(
        "[FILTER] {} of {} items match category={:?} query={:?} filters={}",
        result.len(),
        items.len(),
        category.label(),
        query,
        filters.active_count()
    );
    result
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChoice {
    pub value: String,
    pub label: String,
}

impl FilterChoice {
    fn new(value: &str, label: &str) -> Self {
        Self { value: value.to_string(), label: label.to_string() }
    }
}

/// What the filter dropdown renders for one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDefinition {
    pub key: FilterKey,
    pub options: Vec<FilterChoice>,
    pub bounds: Option<PriceBounds>,
}

impl FilterDefinition {
    pub fn option_label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|choice| choice.value == value)
            .map(|choice| choice.label.as_str())
    }

    /// Summary of the active selection for this key, e.g. "8GB, 12GB"
    pub fn describe(&self, state: &FilterState, currency_prefix: &str) -> Option<String> {
        match state.get(self.key)? {
            FilterValue::Range(range) => Some(format!(
                "{} - {}",
                format_price(currency_prefix, range.min),
                format_price(currency_prefix, range.max)
            )),
            FilterValue::Single(v) => Some(self.option_label(v).unwrap_or(v).to_string()),
            FilterValue::Multi(set) => Some(
                set.iter()
                    .map(|v| self.option_label(v).unwrap_or(v))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

pub fn filter_definitions(catalog: &Catalog, config: &CatalogConfig) -> Vec<FilterDefinition> {
    fn choices(pairs: &[(&str, &str)]) -> Vec<FilterChoice> {
        pairs.iter().map(|(v, l)| FilterChoice::new(v, l)).collect()
    }
    FilterKey::ALL
        .iter()
        .map(|&key| {
            let (options, bounds) = match key {
                FilterKey::Brand => (
                    catalog
                        .brands()
                        .into_iter()
                        .map(|brand| FilterChoice { value: brand.to_lowercase(), label: brand })
                        .collect(),
                    None,
                ),
                FilterKey::PriceRange => (Vec::new(), Some(config.price_range)),
                FilterKey::Ram => (
                    choices(&[
                        ("4gb", "4GB"),
                        ("6gb", "6GB"),
                        ("8gb", "8GB"),
                        ("12gb", "12GB"),
                        ("16gb-plus", "16GB+"),
                    ]),
                    None,
                ),
                FilterKey::Storage => (
                    choices(&[
                        ("64gb", "64GB"),
                        ("128gb", "128GB"),
                        ("256gb", "256GB"),
                        ("512gb", "512GB"),
                        ("1tb-plus", "1TB+"),
                    ]),
                    None,
                ),
                FilterKey::Camera => (
                    choices(&[
                        ("under-48mp", "Under 48MP"),
                        ("48mp", "48MP"),
                        ("50mp", "50MP"),
                        ("64mp", "64MP"),
                        ("108mp-plus", "108MP+"),
                    ]),
                    None,
                ),
                FilterKey::Battery => (
                    choices(&[
                        ("3000-4000", "3000-4000 mAh"),
                        ("4000-5000", "4000-5000 mAh"),
                        ("5000-6000", "5000-6000 mAh"),
                        ("above-6000", "Above 6000 mAh"),
                    ]),
                    None,
                ),
                FilterKey::Network => (choices(&[("4g", "4G"), ("5g", "5G")]), None),
            };
            FilterDefinition { key, options, bounds }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, price: u32, ram: &str) -> Item {
        let mut item = Item::new(id, name, price, Category::Latest);
        item.specs.ram = Some(ram.to_string());
        item.specs.camera = "50MP Triple Camera".to_string();
        item
    }

    fn sample() -> Vec<Item> {
        let mut items = vec![
            make_item(1, "Xiaomi Redmi Note 14 Pro", 79_999, "8GB"),
            make_item(2, "Samsung Galaxy S25 Ultra", 390_500, "12GB"),
            make_item(3, "iPhone 16 Pro Max", 518_999, "6GB"),
            make_item(4, "Nokia G60", 60_000, "4GB"),
        ];
        items[1].specs.storage = Some("256GB".to_string());
        items[2].specs.storage = Some("1TB".to_string());
        items[0].specs.storage = Some("128GB".to_string());
        items[3].category = Category::Budget;
        items
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_category_is_hard_filter() {
        let result = filter_items(&sample(), Category::Latest, "", &FilterState::new(), None);
        assert!(result.iter().all(|i| i.category == Category::Latest));
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = sample();
        let upper = filter_items(&items, Category::Latest, "IPHONE", &FilterState::new(), None);
        let lower = filter_items(&items, Category::Latest, "iphone", &FilterState::new(), None);
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), vec![3]);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let items = sample();
        let mut filters = FilterState::new();
        filters.set_range(FilterKey::PriceRange, PriceRange::new(79_999, 390_500));
        let result = filter_items(&items, Category::Latest, "", &filters, None);
        assert_eq!(ids(&result), vec![1, 2]);

        filters.set_range(FilterKey::PriceRange, PriceRange::new(80_000, 390_499));
        let result = filter_items(&items, Category::Latest, "", &filters, None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_multi_select_is_or_within_key() {
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Ram, "8gb");
        filters.select_option(FilterKey::Ram, "12gb");
        let result = filter_items(&sample(), Category::Latest, "", &filters, None);
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_keys_combine_with_and() {
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Ram, "8gb");
        filters.select_option(FilterKey::Ram, "12gb");
        filters.select_option(FilterKey::Storage, "256gb");
        let result = filter_items(&sample(), Category::Latest, "", &filters, None);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_missing_attribute_excludes_item() {
        let mut items = sample();
        items[0].specs.ram = None;
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Ram, "8gb");
        let result = filter_items(&items, Category::Latest, "", &filters, None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_select_toggles_off() {
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Brand, "samsung");
        assert!(filters.is_selected(FilterKey::Brand, "samsung"));
        filters.select_option(FilterKey::Brand, "google");
        assert!(filters.is_selected(FilterKey::Brand, "google"));
        filters.select_option(FilterKey::Brand, "google");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_multi_select_drops_empty_key() {
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Network, "5g");
        assert_eq!(filters.active_count(), 1);
        filters.select_option(FilterKey::Network, "5g");
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_brand_filter() {
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Brand, "samsung");
        let result = filter_items(&sample(), Category::Latest, "", &filters, None);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_option_match_parsing() {
        assert_eq!(OptionMatch::parse("8gb"), OptionMatch::Exact(8));
        assert_eq!(OptionMatch::parse("1tb-plus"), OptionMatch::AtLeast(1024));
        assert_eq!(OptionMatch::parse("under-48mp"), OptionMatch::Below(48));
        assert_eq!(OptionMatch::parse("above-6000"), OptionMatch::AtLeast(6000));
        assert_eq!(OptionMatch::parse("3000-4000"), OptionMatch::Between(3000, 4000));
        assert_eq!(OptionMatch::parse("5G"), OptionMatch::Equals("5g".to_string()));
    }

    #[test]
    fn test_battery_buckets_do_not_overlap() {
        let mut item = make_item(9, "Asus ROG Phone 8", 148_000, "16GB");
        item.specs.battery = Some("5000mAh".to_string());
        assert!(FilterKey::Battery.matches_option(&item, "5000-6000"));
        assert!(!FilterKey::Battery.matches_option(&item, "4000-5000"));
        assert!(FilterKey::Ram.matches_option(&item, "16gb-plus"));
    }

    #[test]
    fn test_clear_all() {
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Ram, "8gb");
        filters.set_range(FilterKey::PriceRange, PriceRange::new(0, 100_000));
        filters.clear();
        assert!(filters.is_empty());
    }

    #[test]
    fn test_describe_selection() {
        let catalog = Catalog::new(sample()).unwrap();
        let defs = filter_definitions(&catalog, &CatalogConfig::default());
        let ram = defs.iter().find(|d| d.key == FilterKey::Ram).unwrap();
        let price = defs.iter().find(|d| d.key == FilterKey::PriceRange).unwrap();

        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Ram, "8gb");
        filters.select_option(FilterKey::Ram, "12gb");
        filters.set_range(FilterKey::PriceRange, PriceRange::new(10_000, 250_000));

        assert_eq!(ram.describe(&filters, "Rs.").as_deref(), Some("12GB, 8GB"));
        assert_eq!(
            price.describe(&filters, "Rs.").as_deref(),
            Some("Rs. 10,000 - Rs. 250,000")
        );
        assert!(price.bounds.is_some());
    }

    #[test]
    fn test_filter_state_json_round_trip() {
        let mut filters = FilterState::new();
        filters.select_option(FilterKey::Camera, "108mp-plus");
        filters.set_range(FilterKey::PriceRange, PriceRange::new(0, 50_000));
        let json = serde_json::to_string(&filters).unwrap();
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filters);
    }
}
