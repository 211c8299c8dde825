//! Product image for catalog listings: picks the image or the placeholder and
//! wraps the image in the configured badges.

mod availability;
mod decorations;

pub use availability::*;
pub use decorations::*;

use dioxus::prelude::*;

use crate::api::models::{DisplayConfig, DisplayMode, Product};
use crate::components::{css, ImagePlaceholder};
use crate::diagnostics::{log_image_fallback, log_image_load_failure};

#[derive(Debug, Clone, PartialEq)]
pub struct BaseImage {
    pub src: String,
    pub alt: String,
    pub class: &'static str,
}

/// Exactly one layout class applies per display mode.
pub fn image_class(display_mode: DisplayMode) -> &'static str {
    match display_mode {
        DisplayMode::Inline => css::IMAGE_INLINE,
        DisplayMode::Normal => css::IMAGE_NORMAL,
    }
}

impl BaseImage {
    fn new(src: &str, product: &Product, display_mode: DisplayMode) -> Self {
        Self {
            src: src.to_string(),
            alt: product.product_name.clone(),
            class: image_class(display_mode),
        }
    }
}

/// What a product image renders as, before any element is built.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductImageView {
    Placeholder(ImageStatus),
    Image {
        image: BaseImage,
        decorations: Vec<Decoration>,
    },
}

impl ProductImageView {
    pub fn resolve(product: &Product, config: &DisplayConfig, load_state: LoadState) -> Self {
        let status = ImageStatus::resolve(product, load_state);
        match product.image_url() {
            Some(src) if status.is_renderable() => ProductImageView::Image {
                image: BaseImage::new(src, product, config.display_mode),
                decorations: pipeline(product, config),
            },
            _ => ProductImageView::Placeholder(status),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProductImageProps {
    pub product: Product,
    #[props(default)]
    pub config: DisplayConfig,
}

#[component]
pub fn ProductImage(props: ProductImageProps) -> Element {
    let load_state = use_signal(LoadState::default);

    rsx! {
        ProductImageContent { product: props.product, config: props.config, load_state }
    }
}

/// Flips the instance into its errored state; logs only on the first failure.
fn record_load_failure(mut load_state: Signal<LoadState>, product_name: &str, src: &str) {
    if load_state.write().record_failure() {
        log_image_load_failure(product_name, src);
    }
}

#[component]
fn ProductImageContent(
    product: Product,
    config: DisplayConfig,
    load_state: Signal<LoadState>,
) -> Element {
    match ProductImageView::resolve(&product, &config, load_state()) {
        ProductImageView::Placeholder(status) => {
            if let Some(reason) = status.fallback_reason() {
                log_image_fallback(&product.product_name, reason);
            }
            rsx! {
                ImagePlaceholder { css_handle: css::IMAGE_PLACEHOLDER.to_string() }
            }
        }
        ProductImageView::Image { image, decorations } => {
            let product_name = product.product_name.clone();
            let failed_src = image.src.clone();
            let base = rsx! {
                img {
                    class: "{image.class}",
                    src: "{image.src}",
                    alt: "{image.alt}",
                    loading: "lazy",
                    onerror: move |_| record_load_failure(load_state, &product_name, &failed_src),
                }
            };

            compose(base, decorations)
        }
    }
}
