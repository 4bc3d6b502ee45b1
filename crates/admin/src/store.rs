//! In-memory back-office store.
//!
//! Holds products, categories, coupons and orders for the admin pages while
//! product, category and coupon endpoints are not served by the backend. New
//! ids are `max(id) + 1` per table.

use chrono::{DateTime, Utc};
use tracing::debug;

use doudou_core::{CategoryId, CouponId, DomainError, DomainResult, Entity, OrderId, ProductId};

use crate::category::{Category, CategoryDraft};
use crate::coupon::{Coupon, CouponDraft};
use crate::dashboard::DashboardStats;
use crate::mock::{mock_categories, mock_coupons, mock_orders, mock_products};
use crate::order::{Order, OrderStatus};
use crate::product::{AdminProduct, ProductDraft, ProductStatus};

#[derive(Debug, Clone, Default)]
pub struct AdminStore {
    products: Vec<AdminProduct>,
    categories: Vec<Category>,
    coupons: Vec<Coupon>,
    orders: Vec<Order>,
}

fn next_id<T, I>(rows: &[T], first: I, next: impl Fn(I) -> I) -> I
where
    T: Entity<Id = I>,
    I: Copy + Ord,
{
    rows.iter().map(Entity::id).max().map_or(first, next)
}

fn position<T: Entity>(rows: &[T], id: T::Id, entity: &'static str) -> DomainResult<usize> {
    rows.iter()
        .position(|row| row.id() == id)
        .ok_or(DomainError::not_found(entity))
}

impl AdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the fixture data.
    pub fn with_mock_data() -> Self {
        Self {
            products: mock_products(),
            categories: mock_categories(),
            coupons: mock_coupons(),
            orders: mock_orders(),
        }
    }

    // Products

    /// Products with their category joined in.
    pub fn products(&self) -> Vec<AdminProduct> {
        self.products
            .iter()
            .map(|p| {
                let mut joined = p.clone();
                joined.category = self.categories.iter().find(|c| c.id == p.category_id).cloned();
                joined
            })
            .collect()
    }

    pub fn search_products(&self, query: &str) -> Vec<AdminProduct> {
        self.products()
            .into_iter()
            .filter(|p| p.matches_search(query))
            .collect()
    }

    pub fn product(&self, id: ProductId) -> DomainResult<AdminProduct> {
        let idx = position(&self.products, id, "product")?;
        let mut joined = self.products[idx].clone();
        joined.category = self.categories.iter().find(|c| c.id == joined.category_id).cloned();
        Ok(joined)
    }

    pub fn create_product(
        &mut self,
        draft: ProductDraft,
        now: DateTime<Utc>,
    ) -> DomainResult<AdminProduct> {
        draft.validate()?;
        let id = next_id(&self.products, ProductId::new(1), ProductId::next);
        let product = AdminProduct {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description,
            price: draft.price,
            promotion: draft.promotion,
            stock_quantity: draft.stock_quantity,
            status: draft.status,
            category_id: draft.category_id,
            category: None,
            images: draft.images,
            created_at: now,
            updated_at: now,
        };
        debug!(product_id = %id, "admin product created");
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn update_product(
        &mut self,
        id: ProductId,
        draft: ProductDraft,
        now: DateTime<Utc>,
    ) -> DomainResult<AdminProduct> {
        draft.validate()?;
        let idx = position(&self.products, id, "product")?;
        let row = &mut self.products[idx];
        row.name = draft.name.trim().to_string();
        row.description = draft.description;
        row.price = draft.price;
        row.promotion = draft.promotion;
        row.stock_quantity = draft.stock_quantity;
        row.status = draft.status;
        row.category_id = draft.category_id;
        row.images = draft.images;
        row.updated_at = now;
        Ok(row.clone())
    }

    pub fn set_product_status(
        &mut self,
        id: ProductId,
        status: ProductStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<AdminProduct> {
        let idx = position(&self.products, id, "product")?;
        let row = &mut self.products[idx];
        row.status = status;
        row.updated_at = now;
        Ok(row.clone())
    }

    /// Show/hide button: active becomes hidden, anything else active.
    pub fn toggle_product_status(
        &mut self,
        id: ProductId,
        now: DateTime<Utc>,
    ) -> DomainResult<AdminProduct> {
        let idx = position(&self.products, id, "product")?;
        let status = self.products[idx].status.toggled();
        self.set_product_status(id, status, now)
    }

    pub fn delete_product(&mut self, id: ProductId) -> DomainResult<()> {
        let idx = position(&self.products, id, "product")?;
        self.products.remove(idx);
        debug!(product_id = %id, "admin product deleted");
        Ok(())
    }

    // Categories

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of stored products filed under `id`.
    pub fn category_product_count(&self, id: CategoryId) -> usize {
        self.products.iter().filter(|p| p.category_id == id).count()
    }

    pub fn create_category(
        &mut self,
        draft: CategoryDraft,
        now: DateTime<Utc>,
    ) -> DomainResult<Category> {
        draft.validate()?;
        let slug = draft.effective_slug();
        self.ensure_unique_slug(&slug, None)?;
        let category = Category {
            id: next_id(&self.categories, CategoryId::new(1), CategoryId::next),
            name: draft.name.trim().to_string(),
            slug,
            description: draft.description,
            product_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.categories.push(category.clone());
        Ok(category)
    }

    pub fn update_category(
        &mut self,
        id: CategoryId,
        draft: CategoryDraft,
        now: DateTime<Utc>,
    ) -> DomainResult<Category> {
        draft.validate()?;
        let idx = position(&self.categories, id, "category")?;
        let slug = draft.effective_slug();
        self.ensure_unique_slug(&slug, Some(id))?;
        let row = &mut self.categories[idx];
        row.name = draft.name.trim().to_string();
        row.slug = slug;
        row.description = draft.description;
        row.updated_at = now;
        Ok(row.clone())
    }

    pub fn delete_category(&mut self, id: CategoryId) -> DomainResult<()> {
        let idx = position(&self.categories, id, "category")?;
        self.categories.remove(idx);
        Ok(())
    }

    fn ensure_unique_slug(&self, slug: &str, except: Option<CategoryId>) -> DomainResult<()> {
        let taken = self
            .categories
            .iter()
            .any(|c| c.slug == slug && Some(c.id) != except);
        if taken {
            return Err(DomainError::conflict(format!("slug {slug:?} is already used")));
        }
        Ok(())
    }

    // Coupons

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn create_coupon(
        &mut self,
        draft: CouponDraft,
        now: DateTime<Utc>,
    ) -> DomainResult<Coupon> {
        draft.validate()?;
        let code = draft.normalized_code();
        self.ensure_unique_code(&code, None)?;
        let coupon = Coupon {
            id: next_id(&self.coupons, CouponId::new(1), CouponId::next),
            code,
            discount_percent: draft.discount_percent,
            valid_from: draft.valid_from,
            valid_to: draft.valid_to,
            is_active: draft.is_active,
            usage_count: 0,
            max_usage: draft.max_usage,
            created_at: now,
        };
        self.coupons.push(coupon.clone());
        Ok(coupon)
    }

    pub fn update_coupon(&mut self, id: CouponId, draft: CouponDraft) -> DomainResult<Coupon> {
        draft.validate()?;
        let idx = position(&self.coupons, id, "coupon")?;
        let code = draft.normalized_code();
        self.ensure_unique_code(&code, Some(id))?;
        let row = &mut self.coupons[idx];
        row.code = code;
        row.discount_percent = draft.discount_percent;
        row.valid_from = draft.valid_from;
        row.valid_to = draft.valid_to;
        row.is_active = draft.is_active;
        row.max_usage = draft.max_usage;
        Ok(row.clone())
    }

    pub fn toggle_coupon(&mut self, id: CouponId) -> DomainResult<Coupon> {
        let idx = position(&self.coupons, id, "coupon")?;
        let row = &mut self.coupons[idx];
        row.is_active = !row.is_active;
        Ok(row.clone())
    }

    pub fn delete_coupon(&mut self, id: CouponId) -> DomainResult<()> {
        let idx = position(&self.coupons, id, "coupon")?;
        self.coupons.remove(idx);
        Ok(())
    }

    fn ensure_unique_code(&self, code: &str, except: Option<CouponId>) -> DomainResult<()> {
        if self.coupons.iter().any(|c| c.code == code && Some(c.id) != except) {
            return Err(DomainError::conflict(format!("coupon {code} already exists")));
        }
        Ok(())
    }

    // Orders

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> DomainResult<&Order> {
        let idx = position(&self.orders, id, "order")?;
        Ok(&self.orders[idx])
    }

    pub fn set_order_status(
        &mut self,
        id: OrderId,
        status: OrderStatus,
        now: DateTime<Utc>,
    ) -> DomainResult<Order> {
        let idx = position(&self.orders, id, "order")?;
        let row = &mut self.orders[idx];
        row.status = status;
        row.updated_at = now;
        Ok(row.clone())
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.products, &self.orders, &self.categories)
    }
}
