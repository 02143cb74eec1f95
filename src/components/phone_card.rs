//! Phone Card Component
//!
//! Grid tile: image, brand badge, model, price and a favorite heart.

use catalog_core::{format_price, Item};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::hooks::use_is_favorite;
use crate::models::Route;

/// "Samsung Galaxy S25 Ultra" -> ("Samsung", "Galaxy S25 Ultra")
pub fn split_brand_model(name: &str) -> (&str, &str) {
    let name = name.trim();
    match name.split_once(char::is_whitespace) {
        Some((brand, model)) => (brand, model.trim_start()),
        None => (name, ""),
    }
}

#[component]
pub fn FavoriteButton(id: u32, #[prop(optional, into)] extra_class: String) -> impl IntoView {
    let ctx = use_app_context();
    let is_favorite = use_is_favorite(id);

    view! {
        <button
            class=format!("favorite-btn {}", extra_class)
            class:active=move || is_favorite.get()
            aria-label="Add to favorites"
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.toggle_favorite(id);
            }
        >
            {move || if is_favorite.get() { "♥" } else { "♡" }}
        </button>
    }
}

#[component]
pub fn PhoneCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let (brand, model) = split_brand_model(&item.name);
    let (brand, model) = (brand.to_string(), model.to_string());
    let price = format_price(&ctx.currency_prefix(), item.price);
    let ram = item.specs.ram.clone();
    let storage = item.specs.storage.clone();

    view! {
        <div class="phone-card" on:click=move |_| ctx.navigate(Route::Detail(id))>
            <div class="phone-card-image">
                <img src=item.image.clone() alt=item.name.clone() loading="lazy" />
                <FavoriteButton id=id />
            </div>
            <div class="phone-card-body">
                <div class="phone-card-meta">
                    <span class="brand-badge">{brand}</span>
                    <span class="phone-card-specs">
                        {ram.map(|r| view! { <span class="spec-chip">{r}</span> })}
                        {storage.map(|s| view! { <span class="spec-chip">{s}</span> })}
                    </span>
                </div>
                <div class="phone-card-title">
                    <h3>{model}</h3>
                    <p class="price">{price}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_brand_model() {
        assert_eq!(split_brand_model("Samsung Galaxy S25 Ultra"), ("Samsung", "Galaxy S25 Ultra"));
        assert_eq!(split_brand_model("Fairphone"), ("Fairphone", ""));
        assert_eq!(split_brand_model("  Cat S75 "), ("Cat", "S75"));
    }
}
