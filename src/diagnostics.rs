use dioxus::logger::tracing;

#[inline]
pub fn log_image_fallback(product_name: &str, reason: &str) {
    if product_name.trim().is_empty() {
        tracing::debug!("[image] placeholder shown | {reason}");
    } else {
        tracing::debug!("[image] placeholder shown for {product_name} | {reason}");
    }
}

#[inline]
pub fn log_image_load_failure(product_name: &str, src: &str) {
    tracing::warn!("[image] failed to load {src} for {product_name}, falling back to placeholder");
}

pub fn log_catalog_loaded(product_count: usize) {
    tracing::info!("[catalog] loaded {product_count} products");
}

pub fn log_catalog_error(details: &str) {
    tracing::error!("[catalog] {details}");
}
