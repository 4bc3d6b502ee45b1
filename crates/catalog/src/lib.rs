//! Storefront catalog: product records, option tables, the static seed catalog,
//! the filter/sort engine and its query-string dialect.
//!
//! Everything here is pure domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod options;
pub mod product;
pub mod query;
pub mod seed;

pub use filter::{apply, sort_products, FilterSelection};
pub use options::{
    find_collection, AgeBucket, Badge, BudgetBracket, BudgetRange, CollectionInfo, Color, Gender,
    ProductType, SortMode, StockStatus, COLLECTIONS,
};
pub use product::{DisplayText, Product};
pub use query::{from_query, parse_pairs, to_query};
pub use seed::{seed_product, seed_products};
