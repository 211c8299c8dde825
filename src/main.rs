use dioxus::prelude::*;

use product_summary::api::load_demo_catalog;
use product_summary::components::{CatalogErrorPanel, ProductShelf};
use product_summary::diagnostics::{log_catalog_error, log_catalog_loaded};

const APP_CSS: Asset = asset!("/assets/styling/product_summary.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let catalog = use_hook(|| match load_demo_catalog() {
        Ok(catalog) => {
            log_catalog_loaded(catalog.products.len());
            Ok(catalog)
        }
        Err(err) => {
            let message: String = err.into();
            log_catalog_error(&message);
            Err(message)
        }
    });

    rsx! {
        document::Meta { name: "theme-color", content: "#18181b" }
        document::Stylesheet { href: APP_CSS }

        main { class: "min-h-screen bg-zinc-950 text-white p-6",
            {
                match catalog {
                    Ok(catalog) => rsx! {
                        ProductShelf { catalog }
                    },
                    Err(message) => rsx! {
                        CatalogErrorPanel { message }
                    },
                }
            }
        }
    }
}
