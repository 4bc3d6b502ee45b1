//! Shopping cart, persisted under [`CART_KEY`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use doudou_catalog::{DisplayText, Product};
use doudou_core::{Price, ProductId};

use crate::store::{load_json, save_json, KeyValueStore, StoreResult};

pub const CART_KEY: &str = "cart";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: DisplayText,
    pub price: Price,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Cart lines in the order they were first added. At most one line per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> StoreResult<Self> {
        Ok(load_json(store, CART_KEY)?.unwrap_or_default())
    }

    /// Like [`Cart::load`], but an unreadable cart starts empty.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        Self::load(store).unwrap_or_else(|error| {
            warn!(%error, "discarding stored cart");
            Self::default()
        })
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> StoreResult<()> {
        save_json(store, CART_KEY, self)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Add `quantity` units, merging with an existing line for the same product.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let id = product.id_typed();
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.items.push(CartItem {
                id,
                name: product.name().clone(),
                price: product.price(),
                image: product.image().to_string(),
                quantity,
            }),
        }
        debug!(product = %id, quantity, "added to cart");
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity < 1 {
            self.remove(id);
        } else if let Some(line) = self.items.iter_mut().find(|i| i.id == id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|i| i.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Units across all lines, saturating at `u32::MAX`.
    pub fn total_items(&self) -> u32 {
        self.items.iter().fold(0u32, |n, i| n.saturating_add(i.quantity))
    }

    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Shipping is free.
    pub fn shipping(&self) -> Price {
        Price::ZERO
    }

    pub fn total(&self) -> Price {
        self.subtotal() + self.shipping()
    }
}
