use dioxus::prelude::*;

use crate::api::models::{CommertialOffer, DisplayConfig, Product, ProductCluster};
use crate::components::{CollectionBadges, DiscountBadge};

/// A wrapper placed around the product image.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    DiscountBadge {
        list_price: Option<f64>,
        selling_price: Option<f64>,
        label: String,
    },
    CollectionBadges {
        names: Vec<String>,
    },
}

impl Decoration {
    pub fn wrap(self, child: Element) -> Element {
        match self {
            Decoration::DiscountBadge {
                list_price,
                selling_price,
                label,
            } => rsx! {
                DiscountBadge { list_price, selling_price, label, {child} }
            },
            Decoration::CollectionBadges { names } => rsx! {
                CollectionBadges { names, {child} }
            },
        }
    }
}

/// Applied whenever requested, even without prices; the badge decides its own visibility.
pub fn discount_badge(
    offer: &CommertialOffer,
    label: &str,
    should_apply: bool,
) -> Option<Decoration> {
    should_apply.then(|| Decoration::DiscountBadge {
        list_price: offer.list_price,
        selling_price: offer.price,
        label: label.to_string(),
    })
}

pub fn collection_badges(
    clusters: Option<&[ProductCluster]>,
    should_apply: bool,
) -> Option<Decoration> {
    let clusters = clusters.filter(|clusters| !clusters.is_empty())?;
    if !should_apply {
        return None;
    }

    Some(Decoration::CollectionBadges {
        names: clusters.iter().map(|cluster| cluster.name.clone()).collect(),
    })
}

/// Decorations in application order: the first entry wraps the bare image,
/// the last one ends up outermost.
pub fn pipeline(product: &Product, config: &DisplayConfig) -> Vec<Decoration> {
    let offer = product.commertial_offer();

    [
        collection_badges(product.product_clusters.as_deref(), config.show_collections),
        discount_badge(&offer, &config.badge_text, config.show_badge),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn compose(base: Element, decorations: Vec<Decoration>) -> Element {
    decorations
        .into_iter()
        .fold(base, |child, decoration| decoration.wrap(child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Seller, Sku};

    fn clusters(names: &[&str]) -> Vec<ProductCluster> {
        names
            .iter()
            .map(|name| ProductCluster {
                id: None,
                name: name.to_string(),
            })
            .collect()
    }

    fn product(offer: Option<CommertialOffer>, names: Option<&[&str]>) -> Product {
        Product {
            product_name: "Shirt".to_string(),
            product_clusters: names.map(clusters),
            sku: Some(Sku {
                seller: Some(Seller {
                    seller_id: None,
                    commertial_offer: offer,
                }),
                ..Default::default()
            }),
        }
    }

    fn config(show_badge: bool, show_collections: bool) -> DisplayConfig {
        DisplayConfig {
            show_badge,
            badge_text: "-20%".to_string(),
            show_collections,
            ..Default::default()
        }
    }

    #[test]
    fn discount_badge_forwards_prices_and_label() {
        let offer = CommertialOffer {
            list_price: Some(100.0),
            price: Some(80.0),
        };
        assert_eq!(
            discount_badge(&offer, "-20%", true),
            Some(Decoration::DiscountBadge {
                list_price: Some(100.0),
                selling_price: Some(80.0),
                label: "-20%".to_string(),
            })
        );
        assert_eq!(discount_badge(&offer, "-20%", false), None);
    }

    #[test]
    fn discount_badge_applies_without_prices() {
        let decoration = discount_badge(&CommertialOffer::default(), "", true);
        assert_eq!(
            decoration,
            Some(Decoration::DiscountBadge {
                list_price: None,
                selling_price: None,
                label: String::new(),
            })
        );
    }

    #[test]
    fn collection_badges_need_flag_and_clusters() {
        let summer_sale = clusters(&["Summer", "Sale"]);
        assert_eq!(
            collection_badges(Some(summer_sale.as_slice()), true),
            Some(Decoration::CollectionBadges {
                names: vec!["Summer".to_string(), "Sale".to_string()],
            })
        );
        assert_eq!(collection_badges(Some(summer_sale.as_slice()), false), None);
        assert_eq!(collection_badges(Some(&[][..]), true), None);
        assert_eq!(collection_badges(None, true), None);
    }

    #[test]
    fn pipeline_puts_collections_inside_discount_badge() {
        let offer = CommertialOffer {
            list_price: Some(100.0),
            price: Some(80.0),
        };
        let decorations = pipeline(&product(Some(offer), Some(&["Winter"][..])), &config(true, true));

        assert_eq!(decorations.len(), 2);
        assert!(matches!(decorations[0], Decoration::CollectionBadges { .. }));
        assert!(matches!(decorations[1], Decoration::DiscountBadge { .. }));
    }

    #[test]
    fn pipeline_is_empty_when_nothing_applies() {
        let with_clusters = product(None, Some(&["Winter"][..]));
        assert!(pipeline(&with_clusters, &config(false, false)).is_empty());

        let without_clusters = product(None, None);
        assert!(pipeline(&without_clusters, &config(false, true)).is_empty());
    }

    #[test]
    fn pipeline_tolerates_missing_sku() {
        let product = Product {
            product_name: "Loose".to_string(),
            ..Default::default()
        };
        assert_eq!(
            pipeline(&product, &config(true, true)),
            vec![Decoration::DiscountBadge {
                list_price: None,
                selling_price: None,
                label: "-20%".to_string(),
            }]
        );
    }
}
