//! Catalog product record.

use serde::{Deserialize, Serialize};

use doudou_core::{DomainError, DomainResult, Entity, Price, ProductId};

use crate::options::{AgeBucket, Badge, Color, Gender, ProductType, StockStatus};

/// Text that is either shown verbatim or looked up in the locale table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DisplayText {
    Literal(String),
    Key(String),
}

impl DisplayText {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Resolve to the displayed string, translating keys through `translate`.
    pub fn resolve<F>(&self, translate: F) -> String
    where
        F: FnOnce(&str) -> String,
    {
        match self {
            DisplayText::Literal(text) => text.clone(),
            DisplayText::Key(key) => translate(key),
        }
    }
}

/// A product as the storefront sees it.
///
/// Read-only once built: the filter engine only ever borrows products. Fields
/// are private so that the sale-price invariant (`original_price > price`) holds
/// for every instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: DisplayText,
    description: Option<DisplayText>,
    price: Price,
    original_price: Option<Price>,
    stock: StockStatus,
    badge: Option<Badge>,
    collection: String,
    age: AgeBucket,
    color: Option<Color>,
    gender: Gender,
    product_type: Option<ProductType>,
    image: String,
    reviews: Option<u32>,
    rating: Option<f32>,
}

impl Product {
    /// A product with neutral defaults: in stock, no badge, no collection, suited
    /// for `0-6` months, no color, unisex.
    pub fn new(id: ProductId, name: DisplayText, price: Price) -> Self {
        Self {
            id,
            name,
            description: None,
            price,
            original_price: None,
            stock: StockStatus::InStock,
            badge: None,
            collection: String::new(),
            age: AgeBucket::ZeroToSixMonths,
            color: None,
            gender: Gender::Unisex,
            product_type: None,
            image: String::new(),
            reviews: None,
            rating: None,
        }
    }

    /// Mark the product as discounted from `original`.
    pub fn with_original_price(mut self, original: Price) -> DomainResult<Self> {
        if original <= self.price {
            return Err(DomainError::invariant(format!(
                "original price {original} must exceed price {}",
                self.price
            )));
        }
        self.original_price = Some(original);
        Ok(self)
    }

    pub fn with_description(mut self, description: DisplayText) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_stock(mut self, stock: StockStatus) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn in_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn for_age(mut self, age: AgeBucket) -> Self {
        self.age = age;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn for_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn of_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_reviews(mut self, count: u32, rating: f32) -> Self {
        self.reviews = Some(count);
        self.rating = Some(rating);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &DisplayText {
        &self.name
    }

    pub fn description(&self) -> Option<&DisplayText> {
        self.description.as_ref()
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn original_price(&self) -> Option<Price> {
        self.original_price
    }

    pub fn stock(&self) -> StockStatus {
        self.stock
    }

    pub fn badge(&self) -> Option<Badge> {
        self.badge
    }

    pub fn has_badge(&self, badge: Badge) -> bool {
        self.badge == Some(badge)
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn age(&self) -> AgeBucket {
        self.age
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn product_type(&self) -> Option<ProductType> {
        self.product_type
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn reviews(&self) -> Option<u32> {
        self.reviews
    }

    pub fn rating(&self) -> Option<f32> {
        self.rating
    }

    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    pub fn can_be_ordered(&self) -> bool {
        self.stock != StockStatus::OutOfStock
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
