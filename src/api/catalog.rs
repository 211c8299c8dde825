//! Catalog payloads feeding the listing. The demo binary ships one embedded
//! catalog; hosts can parse their own with [`parse_catalog`].

use serde::{Deserialize, Serialize};

use crate::api::models::{null_as_default, DisplayConfig, Product};

const DEMO_CATALOG_JSON: &str = include_str!("../../assets/demo_catalog.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: DisplayConfig,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no products")]
    Empty,
}

impl From<CatalogError> for String {
    fn from(error: CatalogError) -> Self {
        error.to_string()
    }
}

pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    if catalog.products.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(catalog)
}

pub fn load_demo_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(DEMO_CATALOG_JSON)
}
