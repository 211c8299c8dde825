use crate::api::*;
use crate::components::{Icon, ProductImage};
use dioxus::prelude::*;

#[component]
pub fn ProductShelf(catalog: Catalog) -> Element {
    let Catalog { display, products } = catalog;
    let count = products.len();

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header gap-4",
                h1 { class: "page-title", "Products" }
                p { class: "text-sm text-zinc-400", "{count} items" }
            }

            div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
                for (index, product) in products.into_iter().enumerate() {
                    ProductCard {
                        key: "{index}",
                        product,
                        config: display.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: Product, config: DisplayConfig) -> Element {
    let name = product.product_name.clone();
    let price_label = product
        .commertial_offer()
        .price
        .map(|price| format!("${price:.2}"));

    rsx! {
        div { class: "group p-3 rounded-xl bg-zinc-900/60 hover:bg-zinc-800/60 transition-colors flex flex-col gap-3",
            ProductImage { product, config }
            div { class: "min-w-0",
                p { class: "font-medium text-white text-sm truncate group-hover:text-emerald-400 transition-colors",
                    "{name}"
                }
                if let Some(price_label) = price_label {
                    p { class: "text-xs text-zinc-400", "{price_label}" }
                }
            }
        }
    }
}

#[component]
pub fn CatalogErrorPanel(message: String) -> Element {
    rsx! {
        div { class: "flex items-center gap-3 p-4 rounded-xl bg-red-500/10 text-red-300",
            Icon { name: "alert".to_string(), class: "w-5 h-5".to_string() }
            p { class: "text-sm", "{message}" }
        }
    }
}
