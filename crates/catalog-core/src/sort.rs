//! Sort Strategies
//!
//! Two named strategies behind one enum:
//! - `Simple`: one comparator. Missing values sort last, equal keys keep
//!   catalog order (the sort is stable).
//! - `Weighted`: every criterion scores each item in `[-1, 1]` as
//!   `(value / max) * 2 - 1` against the filtered set, scores are averaged
//!   and items are ordered by descending composite, ties by ascending id.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortSpec {
    #[serde(rename = "low-to-high")]
    PriceLowToHigh,
    #[serde(rename = "high-to-low")]
    PriceHighToLow,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "most-viewed")]
    MostViewed,
    #[serde(rename = "trending")]
    Trending,
}

impl SortSpec {
    pub const ALL: [SortSpec; 6] = [
        SortSpec::PriceLowToHigh,
        SortSpec::PriceHighToLow,
        SortSpec::Newest,
        SortSpec::Oldest,
        SortSpec::MostViewed,
        SortSpec::Trending,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SortSpec::PriceLowToHigh => "low-to-high",
            SortSpec::PriceHighToLow => "high-to-low",
            SortSpec::Newest => "newest",
            SortSpec::Oldest => "oldest",
            SortSpec::MostViewed => "most-viewed",
            SortSpec::Trending => "trending",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|spec| spec.id() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortSpec::PriceLowToHigh => "Low to High",
            SortSpec::PriceHighToLow => "High to Low",
            SortSpec::Newest => "Newest First",
            SortSpec::Oldest => "Oldest First",
            SortSpec::MostViewed => "Most Viewed",
            SortSpec::Trending => "Trending",
        }
    }

    /// Heading the option is listed under in the sort menu
    pub fn group(&self) -> &'static str {
        match self {
            SortSpec::PriceLowToHigh | SortSpec::PriceHighToLow => "Price",
            SortSpec::Newest | SortSpec::Oldest => "Release Date",
            SortSpec::MostViewed | SortSpec::Trending => "Popularity",
        }
    }

    fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortSpec::PriceLowToHigh => a.price.cmp(&b.price),
            SortSpec::PriceHighToLow => b.price.cmp(&a.price),
            SortSpec::Newest => missing_last(a.release_date, b.release_date, true),
            SortSpec::Oldest => missing_last(a.release_date, b.release_date, false),
            SortSpec::MostViewed => missing_last(a.views, b.views, true),
            SortSpec::Trending => {
                let a_trending = a.trending.unwrap_or(false);
                let b_trending = b.trending.unwrap_or(false);
                b_trending
                    .cmp(&a_trending)
                    .then_with(|| missing_last(a.views, b.views, true))
            }
        }
    }
}

fn missing_last<T: Ord>(a: Option<T>, b: Option<T>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "criteria", rename_all = "camelCase")]
pub enum SortStrategy {
    Simple(SortSpec),
    Weighted(Vec<SortSpec>),
}

pub fn sort_items(items: &mut Vec<Item>, strategy: &SortStrategy) {
    match strategy {
        SortStrategy::Simple(spec) => items.sort_by(|a, b| spec.compare(a, b)),
        SortStrategy::Weighted(criteria) => {
            if criteria.is_empty() || items.len() < 2 {
                return;
            }
            let scores = composite_scores(items, criteria);
            let mut scored: Vec<(f64, Item)> = scores.into_iter().zip(items.drain(..)).collect();
            scored.sort_by(|(sa, a), (sb, b)| sb.total_cmp(sa).then_with(|| a.id.cmp(&b.id)));
            items.extend(scored.into_iter().map(|(_, item)| item));
        }
    }
}

/// Equal-weight average of each criterion's normalized score, one per item
pub fn composite_scores(items: &[Item], criteria: &[SortSpec]) -> Vec<f64> {
    if criteria.is_empty() {
        return vec![0.0; items.len()];
    }
    let mut totals = vec![0.0; items.len()];
    for spec in criteria {
        for (total, score) in totals.iter_mut().zip(criterion_scores(items, *spec)) {
            *total += score;
        }
    }
    let n = criteria.len() as f64;
    totals.into_iter().map(|total| total / n).collect()
}

/// Missing values score -1; an all-zero column scores 0
fn criterion_scores(items: &[Item], spec: SortSpec) -> Vec<f64> {
    let raw: Vec<Option<f64>> = match spec {
        SortSpec::PriceLowToHigh | SortSpec::PriceHighToLow => {
            items.iter().map(|item| Some(f64::from(item.price))).collect()
        }
        SortSpec::Newest | SortSpec::Oldest => {
            let oldest: Option<NaiveDate> = items.iter().filter_map(|item| item.release_date).min();
            items
                .iter()
                .map(|item| {
                    let (date, oldest) = (item.release_date?, oldest?);
                    Some((date - oldest).num_days() as f64)
                })
                .collect()
        }
        SortSpec::MostViewed => items.iter().map(|item| item.views.map(f64::from)).collect(),
        SortSpec::Trending => items
            .iter()
            .map(|item| item.trending.map(|t| if t { 1.0 } else { 0.0 }))
            .collect(),
    };
    let max = raw.iter().flatten().copied().fold(0.0_f64, f64::max);
    let invert = matches!(spec, SortSpec::PriceLowToHigh | SortSpec::Oldest);
    raw.into_iter()
        .map(|value| match value {
            None => -1.0,
            Some(_) if max <= 0.0 => 0.0,
            Some(v) => {
                let score = (v / max) * 2.0 - 1.0;
                if invert { -score } else { score }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Category;

    fn make_item(id: u32, price: u32, date: Option<(i32, u32, u32)>, views: Option<u32>) -> Item {
        let mut item = Item::new(id, format!("Phone {}", id), price, Category::Latest);
        item.release_date = date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        item.views = views;
        item
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_price_ascending_and_descending() {
        let mut items = vec![
            make_item(1, 300, None, None),
            make_item(2, 100, None, None),
            make_item(3, 200, None, None),
        ];
        sort_items(&mut items, &SortStrategy::Simple(SortSpec::PriceLowToHigh));
        assert_eq!(ids(&items), vec![2, 3, 1]);
        sort_items(&mut items, &SortStrategy::Simple(SortSpec::PriceHighToLow));
        assert_eq!(ids(&items), vec![1, 3, 2]);
    }

    #[test]
    fn test_newest_puts_missing_dates_last() {
        let mut items = vec![
            make_item(1, 0, None, None),
            make_item(2, 0, Some((2023, 1, 10)), None),
            make_item(3, 0, Some((2024, 6, 1)), None),
        ];
        sort_items(&mut items, &SortStrategy::Simple(SortSpec::Newest));
        assert_eq!(ids(&items), vec![3, 2, 1]);
        sort_items(&mut items, &SortStrategy::Simple(SortSpec::Oldest));
        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn test_trending_first_then_views() {
        let mut items = vec![
            make_item(1, 0, None, Some(900)),
            make_item(2, 0, None, Some(100)),
            make_item(3, 0, None, Some(500)),
        ];
        items[1].trending = Some(true);
        items[2].trending = Some(true);
        sort_items(&mut items, &SortStrategy::Simple(SortSpec::Trending));
        assert_eq!(ids(&items), vec![3, 2, 1]);
    }

    #[test]
    fn test_simple_sort_is_stable() {
        let mut items = vec![
            make_item(5, 100, None, None),
            make_item(1, 100, None, None),
            make_item(3, 100, None, None),
        ];
        sort_items(&mut items, &SortStrategy::Simple(SortSpec::PriceLowToHigh));
        assert_eq!(ids(&items), vec![5, 1, 3]);
    }

    #[test]
    fn test_weighted_scores_are_normalized() {
        let items = vec![make_item(1, 100, None, Some(50)), make_item(2, 50, None, Some(100))];
        let scores = composite_scores(&items, &[SortSpec::PriceHighToLow]);
        assert_eq!(scores, vec![1.0, 0.0]);
        let scores = composite_scores(&items, &[SortSpec::MostViewed]);
        assert_eq!(scores, vec![0.0, 1.0]);
    }

    #[test]
    fn test_weighted_blends_criteria() {
        // item 1: cheap, few views; item 2: pricey, many views; item 3: mid, no views
        let mut items = vec![
            make_item(1, 100, None, Some(10)),
            make_item(2, 400, None, Some(100)),
            make_item(3, 200, None, None),
        ];
        let strategy = SortStrategy::Weighted(vec![SortSpec::PriceLowToHigh, SortSpec::MostViewed]);
        sort_items(&mut items, &strategy);
        // 1: (0.5 + -0.8)/2 = -0.15 ; 2: (-1 + 1)/2 = 0 ; 3: (0 + -1)/2 = -0.5
        assert_eq!(ids(&items), vec![2, 1, 3]);
    }

    #[test]
    fn test_weighted_ties_break_by_id() {
        let mut items = vec![
            make_item(9, 100, None, None),
            make_item(4, 100, None, None),
            make_item(7, 100, None, None),
        ];
        sort_items(&mut items, &SortStrategy::Weighted(vec![SortSpec::PriceHighToLow]));
        assert_eq!(ids(&items), vec![4, 7, 9]);
    }

    #[test]
    fn test_weighted_differs_from_simple() {
        let base = vec![
            make_item(1, 100, None, Some(10)),
            make_item(2, 400, None, Some(100)),
            make_item(3, 200, None, None),
        ];
        let mut simple = base.clone();
        sort_items(&mut simple, &SortStrategy::Simple(SortSpec::PriceLowToHigh));
        let mut weighted = base;
        sort_items(
            &mut weighted,
            &SortStrategy::Weighted(vec![SortSpec::PriceLowToHigh, SortSpec::MostViewed]),
        );
        assert_ne!(ids(&simple), ids(&weighted));
    }

    #[test]
    fn test_sort_spec_ids_round_trip() {
        for spec in SortSpec::ALL {
            assert_eq!(SortSpec::from_id(spec.id()), Some(spec));
            let json = serde_json::to_string(&spec).unwrap();
            assert_eq!(json, format!("\"{}\"", spec.id()));
        }
    }
}
