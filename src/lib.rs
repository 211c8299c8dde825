//! Product summary image for catalog listings, built on Dioxus.

pub mod api;
pub mod components;
pub mod diagnostics;
