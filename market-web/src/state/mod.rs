//! Reactive application state shared through Leptos context

pub mod market;
pub mod wallet;
