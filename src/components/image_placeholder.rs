use dioxus::prelude::*;

use crate::components::Icon;

/// Neutral stand-in shown instead of a product image. Receives no product data.
#[component]
pub fn ImagePlaceholder(css_handle: String) -> Element {
    rsx! {
        div { class: "{css_handle} aspect-square w-full flex items-center justify-center rounded-lg bg-zinc-800/60",
            Icon { name: "image".to_string(), class: "w-10 h-10 text-zinc-600".to_string() }
        }
    }
}
