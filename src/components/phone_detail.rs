//! Phone Detail Page

use catalog_core::{format_price, Item};
use leptos::prelude::*;

use crate::components::FavoriteButton;
use crate::context::use_app_context;
use crate::models::Route;

/// Label/value rows shown in the spec table; absent specs are skipped
pub fn spec_rows(item: &Item, currency_prefix: &str) -> Vec<(&'static str, String)> {
    let specs = &item.specs;
    let mut rows = vec![
        ("Price", format_price(currency_prefix, item.price)),
        ("Display", specs.screen.clone()),
        ("Processor", specs.processor.clone()),
        ("Camera", specs.camera.clone()),
    ];
    let optional = [
        ("RAM", specs.ram.as_ref()),
        ("Storage", specs.storage.as_ref()),
        ("Battery", specs.battery.as_ref()),
        ("Network", specs.network.as_ref()),
    ];
    rows.extend(
        optional
            .into_iter()
            .filter_map(|(label, value)| value.map(|v| (label, v.clone()))),
    );
    if let Some(date) = item.release_date {
        rows.push(("Released", date.format("%B %-d, %Y").to_string()));
    }
    rows.retain(|(_, value)| !value.is_empty());
    rows
}

#[component]
pub fn SpecTable(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let rows = spec_rows(&item, &ctx.currency_prefix());

    view! {
        <table class="spec-table">
            <tbody>
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <tr>
                            <th>{label}</th>
                            <td>{value}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn PhoneDetail(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let item = ctx.catalog.with_value(|catalog| catalog.get(id).cloned());

    let Some(item) = item else {
        return view! {
            <main class="detail-page not-found">
                <h1>"Phone not found"</h1>
                <p>{format!("No device with id {} is in the catalog.", id)}</p>
                <a href=Route::Home.to_hash()>"Back to home"</a>
            </main>
        }
        .into_any();
    };

    let category = item.category;
    let price = format_price(&ctx.currency_prefix(), item.price);

    view! {
        <main class="detail-page">
            <nav class="breadcrumb">
                <a href=Route::Home.to_hash()>"Home"</a>
                <span class="separator">"›"</span>
                <a href=Route::Listing(category).to_hash()>{category.label()}</a>
                <span class="separator">"›"</span>
                <span class="current">{item.name.clone()}</span>
            </nav>
            <div class="detail-layout">
                <div class="detail-media">
                    <img src=item.image.clone() alt=item.name.clone() />
                </div>
                <div class="detail-info">
                    <div class="detail-heading">
                        <h1>{item.name.clone()}</h1>
                        <FavoriteButton id=id extra_class="detail-favorite" />
                    </div>
                    <p class="detail-price">{price}</p>
                    <h2>"Specifications"</h2>
                    <SpecTable item=item />
                </div>
            </div>
        </main>
    }
    .into_any()
}
