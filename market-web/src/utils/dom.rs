//! DOM helpers for the static shell in index.html

use crate::utils::constants::LOADING_ELEMENT_ID;

/// Hide the `#leptos-loading` splash. Returns false when the element is missing.
pub fn hide_loading_screen() -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, loading screen left as is");
        return false;
    };

    let Some(element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("#{} not found", LOADING_ELEMENT_ID);
        return false;
    };

    if let Err(e) = element.class_list().add_1("hidden") {
        log::warn!("Failed to add 'hidden' class: {:?}", e);
    }
    // Inline style wins over any stylesheet rule on the splash.
    if let Err(e) = element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to set style on #{}: {:?}", LOADING_ELEMENT_ID, e);
    }

    log::debug!("Loading screen hidden");
    true
}
