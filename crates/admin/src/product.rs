//! Admin view of a product, with publication status and promotions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use doudou_core::{CategoryId, DomainError, DomainResult, Entity, Price, ProductId};

use crate::category::Category;

/// Publication status lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Active,
    Hidden,
}

impl ProductStatus {
    /// Status after pressing the show/hide button: active products are hidden,
    /// anything else becomes active.
    pub fn toggled(self) -> Self {
        match self {
            ProductStatus::Active => ProductStatus::Hidden,
            ProductStatus::Draft | ProductStatus::Hidden => ProductStatus::Active,
        }
    }
}

/// Promotional price valid from `start` to `end`, both days included.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub price: Price,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Promotion {
    pub fn is_running(&self, today: NaiveDate) -> bool {
        self.start <= today && today <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: u64,
    pub url: String,
    pub alt: String,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub promotion: Option<Promotion>,
    pub stock_quantity: u32,
    pub status: ProductStatus,
    pub category_id: CategoryId,
    /// Joined in on listing; not stored.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<Category>,
    pub images: Vec<ProductImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdminProduct {
    /// Price charged on `today`: the promotional price while its window runs,
    /// the list price otherwise.
    pub fn current_price(&self, today: NaiveDate) -> Price {
        match &self.promotion {
            Some(promo) if promo.is_running(today) => promo.price,
            _ => self.price,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Case-insensitive name search; an empty query matches everything.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.name.to_lowercase().contains(&query)
    }

    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.iter().find(|i| i.is_primary).or_else(|| self.images.first())
    }
}

impl Entity for AdminProduct {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Product form contents, for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub promotion: Option<Promotion>,
    pub stock_quantity: u32,
    pub status: ProductStatus,
    pub category_id: CategoryId,
    #[serde(default)]
    pub images: Vec<ProductImage>,
}

impl ProductDraft {
    /// Only the name is required.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(())
    }
}
