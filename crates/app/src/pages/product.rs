//! Product detail page.

use tracing::{debug, info};

use doudou_catalog::{seed_product, Product};
use doudou_client::CatalogBackend;
use doudou_core::ProductId;

use crate::cart::Cart;
use crate::routes::Route;

pub const MAX_RELATED: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductPage {
    Found {
        product: Product,
        /// Same collection, excluding the product itself.
        related: Vec<Product>,
    },
    NotFound {
        back: Route,
    },
}

impl ProductPage {
    /// Look `id` up in the seed catalog first, then on the backend.
    pub async fn load<B: CatalogBackend + ?Sized>(
        backend: &B,
        id: ProductId,
        catalog: &[Product],
    ) -> Self {
        let product = match seed_product(id) {
            Some(product) => Some(product),
            None => match backend.product(id).await {
                Ok(product) => {
                    info!(product = %id, "loaded product from backend");
                    Some(product)
                }
                Err(error) => {
                    debug!(product = %id, %error, "product not available");
                    None
                }
            },
        };

        match product {
            Some(product) => Self::found(product, catalog),
            None => ProductPage::NotFound { back: Route::shop() },
        }
    }

    pub fn found(product: Product, catalog: &[Product]) -> Self {
        let related = catalog
            .iter()
            .filter(|p| {
                p.collection() == product.collection() && p.id_typed() != product.id_typed()
            })
            .take(MAX_RELATED)
            .cloned()
            .collect();
        ProductPage::Found { product, related }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            ProductPage::Found { product, .. } => Some(product),
            ProductPage::NotFound { .. } => None,
        }
    }

    /// Returns `false` when there is nothing orderable on the page.
    pub fn add_to_cart(&self, cart: &mut Cart, quantity: u32) -> bool {
        match self.product() {
            Some(product) if product.can_be_ordered() => {
                cart.add(product, quantity);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doudou_catalog::{seed_products, DisplayText, StockStatus};
    use doudou_core::Price;

    #[test]
    fn related_share_the_collection_and_skip_self() {
        let catalog = seed_products();
        let product = seed_product(ProductId::new(1)).unwrap();
        let page = ProductPage::found(product, &catalog);

        let ProductPage::Found { related, .. } = &page else {
            panic!("expected a product");
        };
        assert!(!related.is_empty());
        assert!(related.len() <= MAX_RELATED);
        assert!(
            related
                .iter()
                .all(|p| p.collection() == "newborn" && p.id_typed() != ProductId::new(1))
        );
    }

    #[test]
    fn related_are_capped() {
        let catalog: Vec<Product> = (1..=10)
            .map(|i| {
                Product::new(ProductId::new(i), DisplayText::literal("x"), Price::from_units(10))
                    .in_collection("bears")
            })
            .collect();
        let page = ProductPage::found(catalog[0].clone(), &catalog);
        let ProductPage::Found { related, .. } = page else {
            panic!("expected a product");
        };
        assert_eq!(related.len(), MAX_RELATED);
    }

    #[test]
    fn out_of_stock_cannot_be_added() {
        let product =
            Product::new(ProductId::new(50), DisplayText::literal("x"), Price::from_units(10))
                .with_stock(StockStatus::OutOfStock);
        let page = ProductPage::found(product, &[]);
        let mut cart = Cart::new();
        assert!(!page.add_to_cart(&mut cart, 1));
        assert!(cart.is_empty());

        let missing = ProductPage::NotFound { back: Route::shop() };
        assert!(!missing.add_to_cart(&mut cart, 1));
    }
}
