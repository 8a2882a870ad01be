//! Marketplace state: catalog plus the home screen's search and category filter

use leptos::prelude::*;
use shared::dto::catalog::{Catalog, CategoryFilter, NewListing, Product};

#[derive(Clone, Copy)]
pub struct MarketContext {
    pub catalog: RwSignal<Catalog>,
    pub search: RwSignal<String>,
    pub category: RwSignal<CategoryFilter>,
}

impl MarketContext {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(Catalog::sample()),
            search: RwSignal::new(String::new()),
            category: RwSignal::new(CategoryFilter::All),
        }
    }

    /// Products matching the current search box and category selection.
    pub fn visible_products(&self) -> Vec<Product> {
        let query = self.search.get();
        let filter = self.category.get();
        self.catalog.with(|catalog| catalog.filtered(&query, filter))
    }

    pub fn add_listing(&self, listing: NewListing) -> Option<Product> {
        let added = self.catalog.try_update(|catalog| catalog.add(listing).clone());
        if let Some(product) = &added {
            log::info!("Listed #{} {}", product.id, product.title);
        }
        added
    }
}

impl Default for MarketContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_market_context() -> MarketContext {
    let context = MarketContext::new();
    provide_context(context);
    context
}

pub fn use_market_context() -> MarketContext {
    expect_context::<MarketContext>()
}
