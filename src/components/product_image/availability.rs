use crate::api::models::Product;

/// Per-instance image load state. The flag only ever goes from `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadState {
    has_errored: bool,
}

impl LoadState {
    pub fn has_errored(self) -> bool {
        self.has_errored
    }

    /// Returns `true` only for the call that actually flipped the flag.
    pub fn record_failure(&mut self) -> bool {
        let changed = !self.has_errored;
        self.has_errored = true;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    NoImage,
    ImageOk,
    ImageErrored,
}

impl ImageStatus {
    pub fn resolve(product: &Product, load_state: LoadState) -> Self {
        if load_state.has_errored() {
            ImageStatus::ImageErrored
        } else if product.image_url().is_none() {
            ImageStatus::NoImage
        } else {
            ImageStatus::ImageOk
        }
    }

    pub fn is_renderable(self) -> bool {
        self == ImageStatus::ImageOk
    }

    pub fn fallback_reason(self) -> Option<&'static str> {
        match self {
            ImageStatus::NoImage => Some("no image url"),
            ImageStatus::ImageErrored => Some("image failed to load"),
            ImageStatus::ImageOk => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Sku, SkuImage};

    fn product_with_url(url: Option<&str>) -> Product {
        Product {
            product_name: "Shirt".to_string(),
            sku: Some(Sku {
                image: Some(SkuImage {
                    image_url: url.map(str::to_string),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn renderable_only_with_url_and_no_error() {
        let ok = product_with_url(Some("u.jpg"));
        assert_eq!(ImageStatus::resolve(&ok, LoadState::default()), ImageStatus::ImageOk);
        assert!(ImageStatus::resolve(&ok, LoadState::default()).is_renderable());

        let missing = product_with_url(None);
        assert_eq!(
            ImageStatus::resolve(&missing, LoadState::default()),
            ImageStatus::NoImage
        );
        assert_eq!(
            ImageStatus::resolve(&Product::default(), LoadState::default()),
            ImageStatus::NoImage
        );
    }

    #[test]
    fn failure_transition_happens_once() {
        let mut state = LoadState::default();
        assert!(!state.has_errored());
        assert!(state.record_failure());
        assert!(state.has_errored());
        assert!(!state.record_failure());
        assert!(state.has_errored());
    }

    #[test]
    fn errored_state_never_renders_an_image_again() {
        let mut state = LoadState::default();
        state.record_failure();

        for url in [Some("u.jpg"), Some("other.jpg"), None] {
            let status = ImageStatus::resolve(&product_with_url(url), state);
            assert!(!status.is_renderable());
        }
        assert_eq!(
            ImageStatus::resolve(&product_with_url(Some("fixed.jpg")), state),
            ImageStatus::ImageErrored
        );
    }

    #[test]
    fn placeholder_states_report_a_reason() {
        assert!(ImageStatus::NoImage.fallback_reason().is_some());
        assert!(ImageStatus::ImageErrored.fallback_reason().is_some());
        assert!(ImageStatus::ImageOk.fallback_reason().is_none());
    }
}
