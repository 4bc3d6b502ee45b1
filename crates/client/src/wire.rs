//! Backend JSON shapes and their mapping onto domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doudou_admin::{Customer, DashboardStats, Order, OrderItem, OrderStatus, OrdersByStatus};
use doudou_catalog::{AgeBucket, DisplayText, Gender, Product, StockStatus};
use doudou_core::{OrderId, Price, ProductId};

use crate::config::ApiConfig;
use crate::error::NetworkError;

/// List endpoints answer either a bare array or a paginated envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Plain(Vec<T>),
    Paged { results: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Plain(items) | ListPayload::Paged { results: items } => items,
        }
    }
}

/// A decimal sent either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireDecimal {
    Number(f64),
    Text(String),
}

impl Default for WireDecimal {
    fn default() -> Self {
        WireDecimal::Number(0.0)
    }
}

impl WireDecimal {
    pub fn to_price(&self) -> Result<Price, NetworkError> {
        let parsed = match self {
            WireDecimal::Number(n) => Price::from_f64(*n),
            WireDecimal::Text(s) => s.trim().parse(),
        };
        parsed.map_err(|e| NetworkError::Decode(format!("bad amount {self:?}: {e}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireImage {
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireProduct {
    pub id: u64,
    #[serde(default)]
    pub category_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: WireDecimal,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub images: Vec<WireImage>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl WireProduct {
    /// Storefront product. Backend products carry no age, color or gender, so
    /// they read as `0-6`, uncolored and unisex.
    pub fn into_product(self, config: &ApiConfig) -> Result<Product, NetworkError> {
        let price = self.price.to_price()?;
        let collection = self
            .category_name
            .filter(|c| !c.is_empty())
            .or(self.slug.filter(|s| !s.is_empty()))
            .unwrap_or_default();
        let image = self
            .images
            .first()
            .map(|img| config.media_url(&img.image))
            .unwrap_or_default();

        let name = DisplayText::literal(self.name);
        let mut product = Product::new(ProductId::new(self.id), name, price)
            .with_stock(StockStatus::from_quantity(self.stock.unwrap_or(0)))
            .in_collection(collection)
            .for_age(AgeBucket::ZeroToSixMonths)
            .for_gender(Gender::Unisex)
            .with_image(image);
        if let Some(description) = self.description.filter(|d| !d.is_empty()) {
            product = product.with_description(DisplayText::literal(description));
        }
        Ok(product)
    }

    pub fn is_listed(&self) -> bool {
        self.is_active != Some(false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireOrderItem {
    pub id: u64,
    pub product: u64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: u32,
    pub price_at_purchase: WireDecimal,
    #[serde(default, alias = "subtotal")]
    pub total: Option<WireDecimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireOrder {
    pub id: u64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub items: Vec<WireOrderItem>,
    #[serde(default, alias = "total_price")]
    pub total: WireDecimal,
    #[serde(default)]
    pub user: Option<u64>,
    #[serde(default)]
    pub user_username: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub guest_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Split a display name into first word and the rest; the rest is `-` when
/// the name has a single word.
fn split_name(full: &str) -> (String, String) {
    let mut words = full.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let rest = words.collect::<Vec<_>>().join(" ");
    let last = if rest.is_empty() { "-".to_string() } else { rest };
    (first, last)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl WireOrder {
    pub fn into_order(self) -> Result<Order, NetworkError> {
        let display_name = non_empty(self.guest_name.clone())
            .or_else(|| non_empty(self.user_username.clone()))
            .unwrap_or_default();
        let (first_name, last_name) = split_name(&display_name);
        let email = non_empty(self.guest_email)
            .or(non_empty(self.user_username))
            .unwrap_or_default();

        let items = self
            .items
            .into_iter()
            .map(|item| {
                let unit_price = item.price_at_purchase.to_price()?;
                let total_price = match &item.total {
                    Some(total) => total.to_price()?,
                    None => unit_price.times(item.quantity),
                };
                Ok(OrderItem {
                    id: item.id,
                    product_id: ProductId::new(item.product),
                    product_name: item.product_name.unwrap_or_default(),
                    product_image: String::new(),
                    quantity: item.quantity,
                    unit_price,
                    total_price,
                })
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;

        let total = self.total.to_price()?;
        let id = OrderId::new(self.id);

        Ok(Order {
            id,
            order_number: Order::number_for(id, self.created_at),
            customer: Customer {
                id: self.user.unwrap_or(0),
                first_name,
                last_name,
                email,
                ..Customer::default()
            },
            items,
            subtotal: total,
            discount: Price::ZERO,
            total,
            status: OrderStatus::from_backend(&self.status),
            coupon_code: None,
            notes: None,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub email: String,
    pub role: String,
}

/// Successful login: the API token and who it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    pub user: AdminUser,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WireOrdersByStatus {
    #[serde(default)]
    pub new: u32,
    #[serde(default)]
    pub processing: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub cancelled: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDashboardStats {
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub active_products: u32,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub total_categories: u32,
    #[serde(default)]
    pub orders_by_status: WireOrdersByStatus,
    #[serde(default)]
    pub total_revenue: WireDecimal,
}

impl WireDashboardStats {
    pub fn into_stats(self) -> Result<DashboardStats, NetworkError> {
        let o = self.orders_by_status;
        Ok(DashboardStats {
            total_products: self.total_products,
            active_products: self.active_products,
            total_orders: self.total_orders,
            orders_by_status: OrdersByStatus {
                new: o.new,
                processing: o.processing,
                completed: o.completed,
                cancelled: o.cancelled,
            },
            total_revenue: self.total_revenue.to_price()?,
            total_categories: self.total_categories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_mapping_defaults() {
        let wire: WireProduct = serde_json::from_value(json!({
            "id": 12,
            "category": 3,
            "category_name": "bears",
            "name": "Urs Polar",
            "slug": "urs-polar",
            "description": "",
            "price": "39.90",
            "stock": 3,
            "is_active": true,
            "images": [{"id": 1, "image": "products/urs.jpg", "alt_text": "", "is_main": true}]
        }))
        .unwrap();
        let p = wire.into_product(&ApiConfig::default()).unwrap();
        assert_eq!(p.price(), Price::from_cents(3990));
        assert_eq!(p.stock(), StockStatus::Limited);
        assert_eq!(p.collection(), "bears");
        assert_eq!(p.age(), AgeBucket::ZeroToSixMonths);
        assert_eq!(p.gender(), Gender::Unisex);
        assert!(p.color().is_none());
        assert!(p.description().is_none());
        assert_eq!(p.image(), "http://127.0.0.1:8000/media/products/urs.jpg");
    }

    #[test]
    fn collection_falls_back_to_slug_then_empty() {
        let raw = json!({"id": 1, "name": "A", "slug": "a-slug", "price": 10});
        let wire: WireProduct = serde_json::from_value(raw).unwrap();
        let p = wire.into_product(&ApiConfig::default()).unwrap();
        assert_eq!(p.collection(), "a-slug");
        assert_eq!(p.stock(), StockStatus::OutOfStock);
        assert_eq!(p.price(), Price::from_units(10));

        let raw = json!({"id": 2, "name": "B", "price": 1.5});
        let bare: WireProduct = serde_json::from_value(raw).unwrap();
        assert_eq!(bare.into_product(&ApiConfig::default()).unwrap().collection(), "");
    }

    #[test]
    fn bad_price_is_a_decode_error() {
        let raw = json!({"id": 1, "name": "A", "price": "abc"});
        let wire: WireProduct = serde_json::from_value(raw).unwrap();
        let decoded = wire.into_product(&ApiConfig::default());
        assert!(matches!(decoded, Err(NetworkError::Decode(_))));
    }

    #[test]
    fn list_payload_accepts_both_shapes() {
        let plain: ListPayload<u32> = serde_json::from_value(json!([1, 2])).unwrap();
        let paged: ListPayload<u32> =
            serde_json::from_value(json!({"count": 2, "results": [1, 2]})).unwrap();
        assert_eq!(plain.into_vec(), paged.into_vec());
    }

    #[test]
    fn order_mapping() {
        let wire: WireOrder = serde_json::from_value(json!({
            "id": 5,
            "status": "COMPLETED",
            "total": "74.80",
            "guest_name": "Ana Maria Pop",
            "guest_email": "ana@example.com",
            "items": [
                {
                    "id": 1,
                    "product": 2,
                    "product_name": "Urs",
                    "quantity": 2,
                    "price_at_purchase": "24.90"
                },
                {"id": 2, "product": 9, "quantity": 1, "price_at_purchase": 25, "subtotal": "25.00"}
            ],
            "created_at": "2025-11-02T10:00:00Z",
            "updated_at": "2025-11-03T10:00:00Z"
        }))
        .unwrap();
        let order = wire.into_order().unwrap();
        assert_eq!(order.order_number, "ORD-2025-005");
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.customer.first_name, "Ana");
        assert_eq!(order.customer.last_name, "Maria Pop");
        assert_eq!(order.customer.email, "ana@example.com");
        assert_eq!(order.items[0].total_price, Price::from_cents(4980));
        assert_eq!(order.items[1].total_price, Price::from_units(25));
        assert_eq!(order.total, Price::from_cents(7480));
    }

    #[test]
    fn order_identity_from_username_and_unknown_status() {
        let wire: WireOrder = serde_json::from_value(json!({
            "id": 17,
            "status": "ON_HOLD",
            "total_price": 10,
            "user": 4,
            "user_username": "ionel",
            "created_at": "2024-01-10T00:00:00Z",
            "updated_at": "2024-01-10T00:00:00Z"
        }))
        .unwrap();
        let order = wire.into_order().unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.customer.first_name, "ionel");
        assert_eq!(order.customer.last_name, "-");
        assert_eq!(order.customer.email, "ionel");
        assert_eq!(order.customer.id, 4);
    }

    #[test]
    fn dashboard_mapping_reads_float_revenue() {
        let wire: WireDashboardStats = serde_json::from_value(json!({
            "totalProducts": 9,
            "activeProducts": 7,
            "totalOrders": 3,
            "totalCategories": 2,
            "ordersByStatus": {"new": 1, "processing": 0, "completed": 2, "cancelled": 0},
            "totalRevenue": 159.8
        }))
        .unwrap();
        let stats = wire.into_stats().unwrap();
        assert_eq!(stats.total_revenue, Price::from_cents(15980));
        assert_eq!(stats.orders_by_status.completed, 2);
    }
}
