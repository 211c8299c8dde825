use serde::{Deserialize, Deserializer, Serialize};

/// Catalog payloads send explicit `null` for unset fields; read those as the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Product {
    #[serde(default, alias = "productName", deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default, alias = "productClusters")]
    pub product_clusters: Option<Vec<ProductCluster>>,
    #[serde(default)]
    pub sku: Option<Sku>,
}

impl Product {
    /// Image source, if one is renderable. Empty strings count as missing.
    pub fn image_url(&self) -> Option<&str> {
        self.sku
            .as_ref()
            .and_then(|sku| sku.image.as_ref())
            .and_then(|image| image.image_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Pricing record of the selected seller. Any missing level yields an empty offer.
    pub fn commertial_offer(&self) -> CommertialOffer {
        self.sku
            .as_ref()
            .and_then(|sku| sku.seller.as_ref())
            .and_then(|seller| seller.commertial_offer.clone())
            .unwrap_or_default()
    }

    pub fn cluster_names(&self) -> Vec<String> {
        self.product_clusters
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|cluster| cluster.name.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductCluster {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Sku {
    #[serde(default, alias = "itemId")]
    pub item_id: Option<String>,
    #[serde(default)]
    pub image: Option<SkuImage>,
    #[serde(default)]
    pub seller: Option<Seller>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SkuImage {
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Seller {
    #[serde(default, alias = "sellerId")]
    pub seller_id: Option<String>,
    #[serde(default, alias = "commertialOffer")]
    pub commertial_offer: Option<CommertialOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommertialOffer {
    #[serde(default, alias = "ListPrice")]
    pub list_price: Option<f64>,
    #[serde(default, alias = "Price")]
    pub price: Option<f64>,
}

/// Layout of the summary the image sits in. Only `"inline"` is special;
/// every other value, including a missing one, is the normal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum DisplayMode {
    Inline,
    #[default]
    Normal,
}

impl From<Option<String>> for DisplayMode {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("inline") => DisplayMode::Inline,
            _ => DisplayMode::Normal,
        }
    }
}

impl From<&str> for DisplayMode {
    fn from(value: &str) -> Self {
        DisplayMode::from(Some(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default, alias = "showBadge", deserialize_with = "null_as_default")]
    pub show_badge: bool,
    #[serde(default, alias = "badgeText", deserialize_with = "null_as_default")]
    pub badge_text: String,
    #[serde(default, alias = "showCollections", deserialize_with = "null_as_default")]
    pub show_collections: bool,
    #[serde(default, alias = "displayMode")]
    pub display_mode: DisplayMode,
}
