//! Enumerated catalog vocabularies and their option tables.
//!
//! Every enum here has a stable string key. The key is what travels in query
//! strings, JSON and locale lookups; the Rust variant is what the engine matches on.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use doudou_core::{DomainError, Price, ValueObject};

macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $key:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable wire key (query strings, JSON, storage).
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Locale table key for the human label.
            pub fn label_key(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_key(s).ok_or_else(|| {
                    DomainError::validation(format!(
                        concat!("unknown ", stringify!($name), " {:?}"),
                        s
                    ))
                })
            }
        }
    };
}

keyed_enum! {
    /// Age range a toy is suited for.
    pub enum AgeBucket {
        ZeroToSixMonths => "0-6", "age.0-6",
        SixToTwelveMonths => "6-12", "age.6-12",
        OneToThreeYears => "1-3", "age.1-3",
        ThreePlusYears => "3+", "age.3+",
    }
}

impl AgeBucket {
    /// Position in the newborn-first ordering used by the "sort by age" filter.
    pub fn rank(self) -> u8 {
        match self {
            AgeBucket::ZeroToSixMonths => 0,
            AgeBucket::SixToTwelveMonths => 1,
            AgeBucket::OneToThreeYears => 2,
            AgeBucket::ThreePlusYears => 3,
        }
    }
}

keyed_enum! {
    /// Color tag of a product.
    pub enum Color {
        Roz => "roz", "color.roz",
        Albastru => "albastru", "color.albastru",
        Bej => "bej", "color.bej",
        Gri => "gri", "color.gri",
    }
}

impl Color {
    /// Swatch shown next to the filter checkbox.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Roz => "#F8B4C0",
            Color::Albastru => "#87CEEB",
            Color::Bej => "#D4C4A8",
            Color::Gri => "#9CA3AF",
        }
    }
}

keyed_enum! {
    /// Promotional tag, independent of stock status.
    pub enum Badge {
        Bestseller => "bestseller", "common.bestseller",
        New => "new", "common.new",
        Sale => "sale", "common.sale",
    }
}

keyed_enum! {
    pub enum StockStatus {
        InStock => "in-stock", "product.inStock",
        Limited => "limited", "product.limitedStock",
        OutOfStock => "out-of-stock", "product.outOfStock",
    }
}

impl StockStatus {
    /// Quantity below which a product shows as limited stock.
    pub const LIMITED_BELOW: u32 = 5;

    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            q if q < Self::LIMITED_BELOW => StockStatus::Limited,
            _ => StockStatus::InStock,
        }
    }
}

keyed_enum! {
    /// Gender affinity. `Unisex` products match every gender filter.
    pub enum Gender {
        Boy => "boy", "gender.boy",
        Girl => "girl", "gender.girl",
        Unisex => "unisex", "gender.unisex",
    }
}

keyed_enum! {
    pub enum ProductType {
        Doudous => "doudous", "productType.doudous",
        Plush => "plush", "productType.plush",
        Puppets => "puppets", "productType.puppets",
        MusicBoxes => "music-boxes", "productType.musicBoxes",
    }
}

keyed_enum! {
    /// Named price range offered by the budget filter.
    pub enum BudgetRange {
        Under20 => "under-20", "budget.under20",
        From20To40 => "20-40", "budget.20-40",
        From40To60 => "40-60", "budget.40-60",
        Over60 => "over-60", "budget.over60",
    }
}

impl BudgetRange {
    pub fn bracket(self) -> BudgetBracket {
        match self {
            BudgetRange::Under20 => BudgetBracket::new(Price::ZERO, Some(Price::from_units(20))),
            BudgetRange::From20To40 => {
                BudgetBracket::new(Price::from_units(20), Some(Price::from_units(40)))
            }
            BudgetRange::From40To60 => {
                BudgetBracket::new(Price::from_units(40), Some(Price::from_units(60)))
            }
            BudgetRange::Over60 => BudgetBracket::new(Price::from_units(60), None),
        }
    }

    pub fn contains(self, price: Price) -> bool {
        self.bracket().contains(price)
    }
}

/// Half-open price interval `[min, max)`; `max: None` is unbounded.
///
/// A price exactly on an edge belongs to the bracket that starts there.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBracket {
    pub min: Price,
    pub max: Option<Price>,
}

impl ValueObject for BudgetBracket {}

impl BudgetBracket {
    pub const fn new(min: Price, max: Option<Price>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Price) -> bool {
        price >= self.min && self.max.is_none_or(|max| price < max)
    }
}

keyed_enum! {
    /// Sort order of the product grid.
    pub enum SortMode {
        Newest => "newest", "shop.sortNewest",
        PriceAsc => "price-asc", "shop.sortPriceAsc",
        PriceDesc => "price-desc", "shop.sortPriceDesc",
        Popular => "popular", "shop.sortPopular",
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Newest
    }
}

/// A thematic collection shown on the collections page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionInfo {
    pub key: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub count: u32,
}

const fn collection(
    key: &'static str,
    name_key: &'static str,
    description_key: &'static str,
    count: u32,
) -> CollectionInfo {
    CollectionInfo { key, name_key, description_key, count }
}

/// The collections page lineup, in display order.
pub const COLLECTIONS: &[CollectionInfo] = &[
    collection("crocodiles", "collection.crocodiles", "collections.crocodiles", 12),
    collection("bears", "collection.bears", "collections.bears", 28),
    collection("hippos", "collection.hippos", "collections.hippos", 8),
    collection("elephants", "collection.elephants", "collections.elephants", 15),
    collection("puppies", "collection.puppies", "collections.puppies", 18),
    collection("kittens", "collection.kittens", "collections.kittens", 14),
    collection("dolls", "collection.dolls", "collections.dolls", 22),
    collection("newborn", "collection.newborn", "collections.newborn", 35),
    collection("blankets", "collection.blankets", "collections.blankets", 16),
];

pub fn find_collection(key: &str) -> Option<&'static CollectionInfo> {
    COLLECTIONS.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_key() {
        for age in AgeBucket::ALL {
            assert_eq!(AgeBucket::from_key(age.key()), Some(*age));
        }
        assert_eq!("music-boxes".parse::<ProductType>().unwrap(), ProductType::MusicBoxes);
        assert!("multicolor".parse::<Color>().is_err());
    }

    #[test]
    fn serde_uses_wire_keys() {
        assert_eq!(serde_json::to_string(&AgeBucket::ThreePlusYears).unwrap(), "\"3+\"");
        assert_eq!(serde_json::to_string(&StockStatus::OutOfStock).unwrap(), "\"out-of-stock\"");
        let sort: SortMode = serde_json::from_str("\"price-desc\"").unwrap();
        assert_eq!(sort, SortMode::PriceDesc);
    }

    #[test]
    fn age_rank_is_newborn_first() {
        let ranks: Vec<u8> = AgeBucket::ALL.iter().map(|a| a.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
    }

    #[test]
    fn bracket_edges_belong_to_the_upper_bracket() {
        let twenty = Price::from_units(20);
        assert!(!BudgetRange::Under20.contains(twenty));
        assert!(BudgetRange::From20To40.contains(twenty));
        assert!(BudgetRange::Under20.contains(Price::from_cents(1999)));
        assert!(BudgetRange::Over60.contains(Price::from_units(10_000)));
        assert!(!BudgetRange::Over60.contains(Price::from_cents(5999)));
    }

    #[test]
    fn brackets_partition_all_prices() {
        for cents in [0, 1, 1999, 2000, 3999, 4000, 5999, 6000, 123_456] {
            let price = Price::from_cents(cents);
            let hits = BudgetRange::ALL.iter().filter(|b| b.contains(price)).count();
            assert_eq!(hits, 1, "price {price} must fall in exactly one bracket");
        }
    }

    #[test]
    fn stock_status_thresholds() {
        assert_eq!(StockStatus::from_quantity(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_quantity(4), StockStatus::Limited);
        assert_eq!(StockStatus::from_quantity(5), StockStatus::InStock);
    }

    #[test]
    fn collections_are_looked_up_by_key() {
        assert_eq!(find_collection("bears").map(|c| c.count), Some(28));
        assert!(find_collection("dragons").is_none());
    }
}
