//! Catalog Item
//!
//! One phone listing. Prices are whole currency units; formatting lives in
//! [`crate::format`].

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::format::parse_price;

/// Fixed set of catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Latest Phones")]
    Latest,
    #[serde(rename = "Premium Phones")]
    Premium,
    #[serde(rename = "Gaming Phones")]
    Gaming,
    #[serde(rename = "Budget Phones")]
    Budget,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Latest,
        Category::Premium,
        Category::Gaming,
        Category::Budget,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Latest => "Latest Phones",
            Category::Premium => "Premium Phones",
            Category::Gaming => "Gaming Phones",
            Category::Budget => "Budget Phones",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Display specs plus the optional attributes the soft filters read
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    pub screen: String,
    pub processor: String,
    pub camera: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: u32,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    pub specs: Specs,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<bool>,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, price: u32, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            category,
            specs: Specs::default(),
            release_date: None,
            views: None,
            trending: None,
        }
    }

    /// Brand is the first word of the display name ("Brand Model")
    pub fn brand(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// RAM in GB, e.g. "8GB" -> 8
    pub fn ram_gb(&self) -> Option<u32> {
        self.specs.ram.as_deref().and_then(parse_capacity_gb)
    }

    /// Storage in GB, "1TB" counts as 1024
    pub fn storage_gb(&self) -> Option<u32> {
        self.specs.storage.as_deref().and_then(parse_capacity_gb)
    }

    /// Main camera megapixels, read from the leading number of the camera spec
    pub fn camera_mp(&self) -> Option<u32> {
        leading_number(&self.specs.camera)
    }

    pub fn battery_mah(&self) -> Option<u32> {
        self.specs.battery.as_deref().and_then(leading_number)
    }

    pub fn network(&self) -> Option<&str> {
        self.specs.network.as_deref()
    }
}

/// Accepts a plain number or the legacy display string ("Rs. 79,999")
fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(u32),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(text) => parse_price(&text)
            .ok_or_else(|| <D::Error as de::Error>::custom(format!("invalid price {:?}", text))),
    }
}

/// Parse "8GB", "256 GB" or "1TB" into gigabytes
pub fn parse_capacity_gb(text: &str) -> Option<u32> {
    let lower = text.trim().to_ascii_lowercase();
    let number = leading_number(&lower)?;
    if lower.contains("tb") {
        number.checked_mul(1024)
    } else {
        Some(number)
    }
}

/// Leading run of ASCII digits, ignoring thousands separators
pub fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(ram: Option<&str>, storage: Option<&str>, camera: &str) -> Item {
        let mut item = Item::new(1, "Xiaomi Redmi Note 14 Pro", 79_999, Category::Latest);
        item.specs.ram = ram.map(str::to_string);
        item.specs.storage = storage.map(str::to_string);
        item.specs.camera = camera.to_string();
        item
    }

    #[test]
    fn test_brand_is_first_word() {
        let item = make_item(None, None, "");
        assert_eq!(item.brand(), "Xiaomi");
    }

    #[test]
    fn test_capacity_parsing() {
        let item = make_item(Some("12GB"), Some("1TB"), "200MP Quad Camera");
        assert_eq!(item.ram_gb(), Some(12));
        assert_eq!(item.storage_gb(), Some(1024));
        assert_eq!(item.camera_mp(), Some(200));
    }

    #[test]
    fn test_missing_attributes() {
        let item = make_item(None, None, "Dual Camera");
        assert_eq!(item.ram_gb(), None);
        assert_eq!(item.storage_gb(), None);
        assert_eq!(item.camera_mp(), None);
        assert_eq!(item.battery_mah(), None);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label("Foldable Phones"), None);
    }

    #[test]
    fn test_item_json_uses_camel_case() {
        let mut item = make_item(Some("8GB"), None, "50MP");
        item.release_date = NaiveDate::from_ymd_opt(2024, 9, 1);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"releaseDate\":\"2024-09-01\""));
        assert!(json.contains("\"category\":\"Latest Phones\""));
        assert!(!json.contains("views"));
    }

    #[test]
    fn test_price_accepts_legacy_string() {
        let json = r#"{ "id": 2, "name": "Samsung Galaxy S25 Ultra", "price": "Rs. 390,500",
            "category": "Latest Phones",
            "specs": { "screen": "", "processor": "", "camera": "" } }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, 390_500);

        let bad = json.replace("Rs. 390,500", "call us");
        assert!(serde_json::from_str::<Item>(&bad).is_err());
    }
}
