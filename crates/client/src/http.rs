//! `reqwest` implementation of the backend seams.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use doudou_admin::{DashboardStats, Order, OrderStatus};
use doudou_catalog::Product;
use doudou_core::{OrderId, ProductId};

use crate::backend::{AdminBackend, CatalogBackend};
use crate::config::ApiConfig;
use crate::error::NetworkError;
use crate::wire::{
    AuthGrant, ErrorBody, ListPayload, LoginRequest, StatusPatch, WireDashboardStats, WireOrder,
    WireProduct,
};

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let url = self.config.url(path);
        debug!(%url, "GET");
        self.client.get(url)
    }

    fn authed(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header(reqwest::header::AUTHORIZATION, format!("Token {token}"))
    }

    /// Send and decode. Non-success answers become [`NetworkError::Status`]
    /// carrying the backend's `detail` message when the body has one.
    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, NetworkError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail);
            debug!(status = status.as_u16(), ?detail, "backend rejected request");
            return Err(NetworkError::Status { status: status.as_u16(), detail });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait::async_trait]
impl CatalogBackend for HttpBackend {
    async fn list_products(&self) -> Result<Vec<Product>, NetworkError> {
        let payload: ListPayload<WireProduct> = Self::send(self.get("/catalog/products/")).await?;
        let products = payload
            .into_vec()
            .into_iter()
            .filter(WireProduct::is_listed)
            .map(|p| p.into_product(&self.config))
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = products.len(), "loaded catalog from backend");
        Ok(products)
    }

    async fn product(&self, id: ProductId) -> Result<Product, NetworkError> {
        let wire: WireProduct = Self::send(self.get(&format!("/catalog/products/{id}/"))).await?;
        wire.into_product(&self.config)
    }
}

#[async_trait::async_trait]
impl AdminBackend for HttpBackend {
    async fn login(&self, email: &str, password: &str) -> Result<AuthGrant, NetworkError> {
        let url = self.config.url("/auth/login/");
        debug!(%url, "POST");
        let grant: AuthGrant =
            Self::send(self.client.post(url).json(&LoginRequest { email, password })).await?;
        info!(email = %grant.user.email, role = %grant.user.role, "admin signed in");
        Ok(grant)
    }

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, NetworkError> {
        let request = Self::authed(self.get("/auth/dashboard-stats/"), token);
        let budget = self.config.dashboard_timeout();
        let wire: WireDashboardStats = tokio::time::timeout(budget, Self::send(request))
            .await
            .map_err(|_| NetworkError::Timeout)??;
        wire.into_stats()
    }

    async fn orders(&self, token: &str) -> Result<Vec<Order>, NetworkError> {
        let payload: ListPayload<WireOrder> =
            Self::send(Self::authed(self.get("/orders/"), token)).await?;
        let orders = payload
            .into_vec()
            .into_iter()
            .map(WireOrder::into_order)
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = orders.len(), "loaded orders from backend");
        Ok(orders)
    }

    async fn order(&self, token: &str, id: OrderId) -> Result<Order, NetworkError> {
        let request = Self::authed(self.get(&format!("/orders/{id}/")), token);
        let wire: WireOrder = Self::send(request).await?;
        wire.into_order()
    }

    async fn update_order_status(
        &self,
        token: &str,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, NetworkError> {
        let url = self.config.url(&format!("/orders/{id}/"));
        debug!(%url, status = status.backend_code(), "PATCH");
        let request = self
            .client
            .patch(url)
            .json(&StatusPatch { status: status.backend_code() });
        let wire: WireOrder = Self::send(Self::authed(request, token)).await?;
        info!(order = %id, %status, "order status updated");
        wire.into_order()
    }
}
