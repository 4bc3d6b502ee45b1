//! Backend seams used by the page controllers.

use doudou_admin::{DashboardStats, Order, OrderStatus};
use doudou_catalog::Product;
use doudou_core::{OrderId, ProductId};

use crate::error::NetworkError;
use crate::wire::AuthGrant;

/// Public catalog endpoints.
#[async_trait::async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Every listed product. Products the backend marks inactive are skipped.
    async fn list_products(&self) -> Result<Vec<Product>, NetworkError>;

    async fn product(&self, id: ProductId) -> Result<Product, NetworkError>;
}

/// Token-authenticated back-office endpoints.
#[async_trait::async_trait]
pub trait AdminBackend: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, NetworkError>;

    /// Bounded by the configured dashboard timeout.
    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, NetworkError>;

    async fn orders(&self, token: &str) -> Result<Vec<Order>, NetworkError>;

    async fn order(&self, token: &str, id: OrderId) -> Result<Order, NetworkError>;

    /// Returns the order as the backend stored it.
    async fn update_order_status(
        &self,
        token: &str,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, NetworkError>;
}
