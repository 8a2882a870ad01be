//! Product grid card

use leptos::prelude::*;
use shared::dto::catalog::Product;

use crate::config::Locale;
use crate::utils::format::format_price;

#[component]
pub fn ProductCard(product: Product, locale: Locale) -> impl IntoView {
    let price = format_price(product.price, locale);
    let description = (!product.description.is_empty()).then_some(product.description);

    view! {
        <div class="product-card">
            <div class="product-image">{product.image}</div>
            <div class="product-body">
                <h3 class="product-title">{product.title}</h3>
                <p class="product-price">{price}</p>
                {description.map(|text| view! { <p class="product-description">{text}</p> })}
                <p class="product-location">{product.location}</p>
                <div class="product-footer">
                    <span class="product-likes">{format!("❤️ {}", product.likes)}</span>
                    {product.is_new.then(|| view! { <span class="badge-new">"NEW"</span> })}
                </div>
            </div>
        </div>
    }
}
