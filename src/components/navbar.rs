//! Navbar Component

use catalog_core::Category;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::hooks::use_favorites;
use crate::models::Route;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let favorites = use_favorites();
    let favorite_count = move || favorites.with(|ids| ids.len());

    view! {
        <nav class="navbar">
            <a class="navbar-brand" href=Route::Home.to_hash()>"PhoneHub"</a>
            <div class="navbar-links">
                <a
                    href=Route::Home.to_hash()
                    class:active=move || ctx.route.get() == Route::Home
                >
                    "Home"
                </a>
                <a
                    href=Route::Listing(Category::default()).to_hash()
                    class:active=move || matches!(ctx.route.get(), Route::Listing(_))
                >
                    "Mobile Phones"
                </a>
            </div>
            <a
                class="navbar-favorites"
                href=Route::Favorites.to_hash()
                class:active=move || ctx.route.get() == Route::Favorites
                aria-label="Favorites"
            >
                "♥"
                <Show when=move || { favorite_count() > 0 }>
                    <span class="badge">{favorite_count}</span>
                </Show>
            </a>
        </nav>
    }
}
