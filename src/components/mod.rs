//! UI Components
//!
//! Pages and the Leptos components they are built from.

mod category_bar;
mod favorites_page;
mod filter_dropdown;
mod home_page;
mod listing_page;
mod navbar;
mod pager;
mod phone_card;
mod phone_detail;
mod phone_grid;
mod search_bar;
mod sort_menu;

pub use category_bar::CategoryBar;
pub use favorites_page::FavoritesPage;
pub use filter_dropdown::FilterDropdown;
pub use home_page::HomePage;
pub use listing_page::ListingPage;
pub use navbar::Navbar;
pub use pager::Pager;
pub use phone_card::{FavoriteButton, PhoneCard};
pub use phone_detail::{spec_rows, PhoneDetail};
pub use phone_grid::PhoneGrid;
pub use search_bar::SearchBar;
pub use sort_menu::SortMenu;
