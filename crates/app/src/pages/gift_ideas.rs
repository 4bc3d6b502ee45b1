//! Gift ideas page: pick an occasion, then narrow the catalog with the usual filters.

use serde::{Deserialize, Serialize};

use doudou_catalog::{apply, FilterSelection, Product};
use doudou_client::Sourced;

use crate::pages::shop::ShopAction;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Occasion {
    Birth,
    Baptism,
    Birthday,
    GiftSets,
}

impl Occasion {
    pub const ALL: [Occasion; 4] = [
        Occasion::Birth,
        Occasion::Baptism,
        Occasion::Birthday,
        Occasion::GiftSets,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Occasion::Birth => "birth",
            Occasion::Baptism => "baptism",
            Occasion::Birthday => "birthday",
            Occasion::GiftSets => "gift-sets",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Occasion::Birth => "giftIdeas.birth",
            Occasion::Baptism => "giftIdeas.baptism",
            Occasion::Birthday => "giftIdeas.birthday",
            Occasion::GiftSets => "giftIdeas.giftSets",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.key() == key)
    }
}

#[derive(Debug, Clone)]
pub struct GiftIdeasPage {
    catalog: Sourced<Vec<Product>>,
    occasion: Option<Occasion>,
    selection: FilterSelection,
}

impl GiftIdeasPage {
    pub fn new(catalog: Sourced<Vec<Product>>) -> Self {
        Self { catalog, occasion: None, selection: FilterSelection::default() }
    }

    pub fn occasion(&self) -> Option<Occasion> {
        self.occasion
    }

    /// Single select: picking an occasion replaces the previous one.
    pub fn select_occasion(&mut self, occasion: Occasion) {
        self.occasion = Some(occasion);
    }

    pub fn clear_occasion(&mut self) {
        self.occasion = None;
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Same filter actions as the shop page.
    pub fn dispatch(&mut self, action: ShopAction) {
        action.apply_to(&mut self.selection);
    }

    pub fn products(&self) -> Vec<&Product> {
        apply(self.catalog.value(), &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doudou_catalog::{seed_products, BudgetRange};

    #[test]
    fn occasion_is_single_select() {
        let mut page = GiftIdeasPage::new(Sourced::Fallback(seed_products()));
        assert_eq!(page.occasion(), None);
        page.select_occasion(Occasion::Birth);
        page.select_occasion(Occasion::Baptism);
        assert_eq!(page.occasion(), Some(Occasion::Baptism));
        page.clear_occasion();
        assert_eq!(page.occasion(), None);
    }

    #[test]
    fn occasion_keys() {
        for occasion in Occasion::ALL {
            assert_eq!(Occasion::from_key(occasion.key()), Some(occasion));
        }
        assert_eq!(Occasion::GiftSets.key(), "gift-sets");
        assert_eq!(Occasion::from_key("wedding"), None);
    }

    #[test]
    fn filters_narrow_the_gift_grid() {
        let mut page = GiftIdeasPage::new(Sourced::Fallback(seed_products()));
        assert_eq!(page.products().len(), 9);

        page.dispatch(ShopAction::ToggleBudget(BudgetRange::Under20));
        let products = page.products();
        assert!(!products.is_empty());
        assert!(products.iter().all(|p| BudgetRange::Under20.contains(p.price())));
    }
}
