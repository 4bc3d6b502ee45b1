//! Page controllers: typed state and views for each client route.

pub mod admin;
pub mod cart;
pub mod gift_ideas;
pub mod home;
pub mod product;
pub mod shop;

use tracing::info;

use doudou_catalog::{seed_products, Product};
use doudou_client::{CatalogBackend, FallbackExt, Sourced};

/// The catalog pages work from: the backend list when it has products,
/// otherwise the static seed.
pub async fn load_catalog<B: CatalogBackend + ?Sized>(backend: &B) -> Sourced<Vec<Product>> {
    match backend.list_products().await {
        Ok(products) if !products.is_empty() => Sourced::Remote(products),
        Ok(_) => {
            info!("backend catalog is empty, showing the seed catalog");
            Sourced::Fallback(seed_products())
        }
        Err(error) => Err(error).or_fallback("catalog", seed_products),
    }
}
