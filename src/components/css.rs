//! Class handles exposed to themes. Hosts target these to restyle the summary.

pub const IMAGE_NORMAL: &str = "product-summary-image-normal";
pub const IMAGE_INLINE: &str = "product-summary-image-inline";
pub const IMAGE_PLACEHOLDER: &str = "product-summary-image-placeholder";
pub const DISCOUNT_BADGE: &str = "product-summary-discount-badge";
pub const COLLECTION_BADGES: &str = "product-summary-collection-badges";
