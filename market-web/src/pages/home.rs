//! Home Page - search box, category bar and product grid

use leptos::prelude::*;
use shared::dto::catalog::CategoryFilter;

use crate::components::ProductCard;
use crate::state::market::use_market_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let market = use_market_context();
    let locale = use_wallet_context().config.locale;

    view! {
        <div class="screen home-screen">
            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search products..."
                    prop:value=move || market.search.get()
                    on:input=move |ev| market.search.set(event_target_value(&ev))
                />
            </div>

            <div class="category-bar">
                {CategoryFilter::options().into_iter().map(|filter| view! {
                    <button
                        class="category-chip"
                        class:selected=move || market.category.get() == filter
                        on:click=move |_| market.category.set(filter)
                    >
                        <span class="category-icon">{filter.icon()}</span>
                        <span class="category-label">{filter.label()}</span>
                    </button>
                }).collect_view()}
            </div>

            <div class="product-grid">
                <For
                    each=move || market.visible_products()
                    key=|product| product.id
                    children=move |product| view! { <ProductCard product=product locale=locale/> }
                />
            </div>

            {move || market.visible_products().is_empty().then(|| view! {
                <p class="empty-state">"No products match your search"</p>
            })}
        </div>
    }
}
