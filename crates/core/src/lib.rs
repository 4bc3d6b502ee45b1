//! Domain foundation building blocks shared by every Doudou crate.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, CouponId, OrderId, ProductId};
pub use money::Price;
pub use value_object::ValueObject;
