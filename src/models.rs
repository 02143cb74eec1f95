//! Frontend Models
//!
//! Navigation targets and their `#/...` hash form.

use catalog_core::Category;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Query values keep spaces (sent as `+`) and unreserved punctuation
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Which page is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Listing(Category),
    Detail(u32),
    Favorites,
}

impl Route {
    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Listing(category) => {
                format!("#/mobile-phones?category={}", encode_label(category.label()))
            }
            Route::Detail(id) => format!("#/phone/{}", id),
            Route::Favorites => "#/favorites".to_string(),
        }
    }

    /// Unknown or malformed hashes land on the home page
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "favorites" => Route::Favorites,
            "mobile-phones" => {
                let category = query
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(k, _)| *k == "category")
                    .and_then(|(_, v)| Category::from_label(&decode_label(v)))
                    .unwrap_or_default();
                Route::Listing(category)
            }
            other => other
                .strip_prefix("phone/")
                .and_then(|id| id.parse().ok())
                .map(Route::Detail)
                .unwrap_or(Route::Home),
        }
    }
}

fn encode_label(label: &str) -> String {
    utf8_percent_encode(label, QUERY_VALUE).to_string().replace(' ', "+")
}

fn decode_label(value: &str) -> String {
    percent_decode_str(&value.replace('+', " ")).decode_utf8_lossy().into_owned()
}
