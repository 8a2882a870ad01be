//! Sell Page - product listing form
//!
//! Listings are validated with [`ProductDraft::validate`] and added to the
//! in-memory catalog. Nothing is persisted.

use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::dto::catalog::{Category, ProductDraft};

use crate::state::market::use_market_context;

#[component]
pub fn SellPage() -> impl IntoView {
    let market = use_market_context();
    let navigate = use_navigate();

    let draft = RwSignal::new(ProductDraft::default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        match draft.with(|d| d.validate()) {
            Ok(listing) => {
                set_error.set(None);
                if market.add_listing(listing).is_some() {
                    draft.set(ProductDraft::default());
                    navigate("/", Default::default());
                }
            }
            Err(e) => {
                log!("Listing rejected: {}", e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="screen sell-screen">
            <form class="card" on:submit=on_submit>
                <h2 class="card-title">"List a product"</h2>

                <div class="field">
                    <label>"Photo"</label>
                    <div class="photo-drop">
                        <span class="photo-icon">"📷"</span>
                        <p>"Photo upload is not available yet"</p>
                    </div>
                </div>

                <div class="field">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="What are you selling?"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="price">"Price (won)"</label>
                    <input
                        id="price"
                        type="text"
                        inputmode="numeric"
                        placeholder="0"
                        prop:value=move || draft.with(|d| d.price.clone())
                        on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label for="category">"Category"</label>
                    <select
                        id="category"
                        prop:value=move || draft.with(|d| d.category.id())
                        on:change=move |ev| {
                            if let Some(category) = Category::from_id(&event_target_value(&ev)) {
                                draft.update(|d| d.category = category);
                            }
                        }
                    >
                        {Category::ALL.into_iter().map(|category| view! {
                            <option value=category.id()>
                                {format!("{} {}", category.icon(), category.label())}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="4"
                        placeholder="Condition, included accessories, ..."
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="field">
                    <label for="location">"Trade location"</label>
                    <input
                        id="location"
                        type="text"
                        placeholder="Where do you want to meet?"
                        prop:value=move || draft.with(|d| d.location.clone())
                        on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                    />
                </div>

                {move || error.get().map(|err| view! {
                    <div class="error"><p>{err}</p></div>
                })}

                <button type="submit" class="btn btn-primary">"📤 List product"</button>
            </form>
        </div>
    }
}
