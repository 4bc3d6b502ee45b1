//! Back-office domain: admin products, categories, orders, coupons and
//! dashboard statistics, plus the mock data the admin pages fall back to.
//!
//! Pure domain logic (no IO, no HTTP). Timestamps are passed in by the caller.

pub mod category;
pub mod coupon;
pub mod dashboard;
pub mod mock;
pub mod optimistic;
pub mod order;
pub mod product;
pub mod store;

pub use category::{slugify, Category, CategoryDraft};
pub use coupon::{Coupon, CouponDraft, CouponState, DISCOUNT_PERCENT_RANGE};
pub use dashboard::{DashboardStats, OrdersByStatus};
pub use optimistic::{OptimisticList, PendingChange};
pub use mock::{mock_categories, mock_coupons, mock_orders, mock_products};
pub use order::{filter_orders, Customer, Order, OrderItem, OrderStatus, StatusFilter};
pub use product::{AdminProduct, ProductDraft, ProductImage, ProductStatus, Promotion};
pub use store::AdminStore;
