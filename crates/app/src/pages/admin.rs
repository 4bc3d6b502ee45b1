//! Back-office pages.
//!
//! Orders and dashboard figures come from the backend, with the mock data as
//! fallback. Products, categories and coupons live in the in-memory
//! [`AdminStore`].

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use tracing::{info, warn};

use doudou_admin::{
    filter_orders, mock_orders, AdminProduct, AdminStore, Category, Coupon, CouponState,
    DashboardStats, OptimisticList, Order, OrderStatus, ProductStatus, StatusFilter,
};
use doudou_client::{AdminBackend, FallbackExt, NetworkError, Sourced};
use doudou_core::{DomainError, OrderId, Price, ProductId};

use crate::session::AdminSession;

#[derive(Debug, Error)]
pub enum AdminPageError {
    #[error("admin session required")]
    NotSignedIn,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

fn token(session: &AdminSession) -> Result<&str, AdminPageError> {
    session.token().ok_or(AdminPageError::NotSignedIn)
}

pub struct DashboardPage;

impl DashboardPage {
    /// Figures from the backend within the dashboard timeout, otherwise the
    /// ones computed from `fallback`.
    pub async fn load<B: AdminBackend + ?Sized>(
        backend: &B,
        session: &AdminSession,
        fallback: &AdminStore,
    ) -> Result<Sourced<DashboardStats>, AdminPageError> {
        let token = token(session)?;
        Ok(backend
            .dashboard_stats(token)
            .await
            .or_fallback("dashboard stats", || fallback.dashboard_stats()))
    }
}

#[derive(Debug, Clone)]
pub struct OrdersPage {
    orders: OptimisticList<Order>,
    fallback: bool,
    search: String,
    status: StatusFilter,
}

impl OrdersPage {
    pub fn new(orders: Sourced<Vec<Order>>) -> Self {
        let fallback = orders.is_fallback();
        Self {
            orders: OptimisticList::new(orders.into_inner()),
            fallback,
            search: String::new(),
            status: StatusFilter::All,
        }
    }

    pub async fn load<B: AdminBackend + ?Sized>(
        backend: &B,
        session: &AdminSession,
    ) -> Result<Self, AdminPageError> {
        let token = token(session)?;
        let orders = backend.orders(token).await.or_fallback("orders", mock_orders);
        Ok(Self::new(orders))
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.status = status;
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// Orders matching the search box and status dropdown.
    pub fn visible(&self) -> Vec<&Order> {
        filter_orders(self.orders.items(), &self.search, self.status)
    }

    /// Show the new status at once, then confirm it with the backend. On
    /// failure the row goes back to what it was and the error is returned.
    pub async fn update_status<B: AdminBackend + ?Sized>(
        &mut self,
        backend: &B,
        session: &AdminSession,
        id: OrderId,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<(), AdminPageError> {
        let token = token(session)?;
        let pending = self
            .orders
            .begin(id, |order| {
                order.status = status;
                order.updated_at = now;
            })
            .ok_or(DomainError::not_found("order"))?;

        match backend.update_order_status(token, id, status).await {
            Ok(confirmed) => {
                info!(order = %id, %status, "order status confirmed");
                self.orders.commit(pending, Some(confirmed));
                Ok(())
            }
            Err(error) => {
                warn!(order = %id, %error, "order status update failed, rolling back");
                self.orders.rollback(pending);
                Err(error.into())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub price: Price,
    pub current_price: Price,
    pub stock_quantity: u32,
    pub status: ProductStatus,
    pub image: Option<String>,
}

impl ProductRow {
    fn of(product: &AdminProduct, today: NaiveDate) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.as_ref().map(|c| c.name.clone()),
            price: product.price,
            current_price: product.current_price(today),
            stock_quantity: product.stock_quantity,
            status: product.status,
            image: product.primary_image().map(|i| i.url.clone()),
        }
    }

    pub fn on_promotion(&self) -> bool {
        self.current_price < self.price
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductsPage {
    pub search: String,
}

impl ProductsPage {
    pub fn rows(&self, store: &AdminStore, today: NaiveDate) -> Vec<ProductRow> {
        store
            .search_products(&self.search)
            .iter()
            .map(|p| ProductRow::of(p, today))
            .collect()
    }

    pub fn toggle_status(
        &self,
        store: &mut AdminStore,
        id: ProductId,
        now: DateTime<Utc>,
    ) -> Result<ProductStatus, AdminPageError> {
        Ok(store.toggle_product_status(id, now)?.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: Category,
    pub product_count: usize,
}

pub fn category_rows(store: &AdminStore) -> Vec<CategoryRow> {
    store
        .categories()
        .iter()
        .map(|c| CategoryRow {
            category: c.clone(),
            product_count: store.category_product_count(c.id),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRow {
    pub coupon: Coupon,
    pub state: CouponState,
    pub usage_exhausted: bool,
}

pub fn coupon_rows(store: &AdminStore, today: NaiveDate) -> Vec<CouponRow> {
    store
        .coupons()
        .iter()
        .map(|c| CouponRow {
            coupon: c.clone(),
            state: c.state(today),
            usage_exhausted: c.usage_exhausted(),
        })
        .collect()
}
