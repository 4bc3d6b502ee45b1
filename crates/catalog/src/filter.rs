//! Catalog filter/sort engine.
//!
//! `apply` is a pure function of the product slice and the selection: it borrows
//! the products, keeps the ones every predicate accepts, and orders them with a
//! stable sort. The input slice is never touched.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::{AgeBucket, Badge, BudgetRange, Color, Gender, SortMode};
use crate::product::Product;

/// The shopper's active filter and sort choices.
///
/// An empty multi-select set means "no restriction" on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub collections: BTreeSet<String>,
    pub budgets: BTreeSet<BudgetRange>,
    pub ages: BTreeSet<AgeBucket>,
    pub colors: BTreeSet<Color>,
    pub sale_only: bool,
    pub new_only: bool,
    pub gender: Option<Gender>,
    pub sort_by_age: bool,
    pub sort: SortMode,
}

type Predicate = fn(&FilterSelection, &Product) -> bool;

const PREDICATES: &[Predicate] = &[
    matches_collection,
    matches_sale,
    matches_new,
    matches_gender,
    matches_budget,
    matches_age,
    matches_color,
];

fn matches_collection(sel: &FilterSelection, product: &Product) -> bool {
    sel.collections.is_empty() || sel.collections.contains(product.collection())
}

fn matches_sale(sel: &FilterSelection, product: &Product) -> bool {
    !sel.sale_only || product.has_badge(Badge::Sale)
}

fn matches_new(sel: &FilterSelection, product: &Product) -> bool {
    !sel.new_only || product.has_badge(Badge::New)
}

fn matches_gender(sel: &FilterSelection, product: &Product) -> bool {
    match sel.gender {
        None => true,
        Some(gender) => product.gender() == gender || product.gender() == Gender::Unisex,
    }
}

fn matches_budget(sel: &FilterSelection, product: &Product) -> bool {
    sel.budgets.is_empty() || sel.budgets.iter().any(|b| b.contains(product.price()))
}

fn matches_age(sel: &FilterSelection, product: &Product) -> bool {
    sel.ages.is_empty() || sel.ages.contains(&product.age())
}

fn matches_color(sel: &FilterSelection, product: &Product) -> bool {
    sel.colors.is_empty() || product.color().is_some_and(|c| sel.colors.contains(&c))
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every predicate accepts `product`.
    pub fn matches(&self, product: &Product) -> bool {
        PREDICATES.iter().all(|predicate| predicate(self, product))
    }

    pub fn toggle_collection(&mut self, key: impl Into<String>) {
        toggle(&mut self.collections, key.into());
    }

    pub fn toggle_budget(&mut self, budget: BudgetRange) {
        toggle(&mut self.budgets, budget);
    }

    pub fn toggle_age(&mut self, age: AgeBucket) {
        toggle(&mut self.ages, age);
    }

    pub fn toggle_color(&mut self, color: Color) {
        toggle(&mut self.colors, color);
    }

    pub fn toggle_sale_only(&mut self) {
        self.sale_only = !self.sale_only;
    }

    pub fn toggle_new_only(&mut self) {
        self.new_only = !self.new_only;
    }

    pub fn toggle_sort_by_age(&mut self) {
        self.sort_by_age = !self.sort_by_age;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Clear every axis back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of active restrictions, as shown on the filter badge.
    pub fn active_count(&self) -> usize {
        self.collections.len()
            + self.budgets.len()
            + self.ages.len()
            + self.colors.len()
            + usize::from(self.sale_only)
            + usize::from(self.new_only)
            + usize::from(self.gender.is_some())
    }
}

/// Order `products` in place for `selection`.
///
/// `sort_by_age` takes precedence over the sort mode. Products with equal keys
/// keep their relative order.
pub fn sort_products(products: &mut [&Product], selection: &FilterSelection) {
    if selection.sort_by_age {
        products.sort_by_key(|p| p.age().rank());
        return;
    }

    match selection.sort {
        SortMode::PriceAsc => products.sort_by_key(|p| p.price()),
        SortMode::PriceDesc => products.sort_by_key(|p| Reverse(p.price())),
        SortMode::Popular => products.sort_by_key(|p| !p.has_badge(Badge::Bestseller)),
        SortMode::Newest => products.sort_by_key(|p| !p.has_badge(Badge::New)),
    }
}

/// Visible products for `selection`, in display order.
pub fn apply<'a>(products: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().filter(|p| selection.matches(p)).collect();
    sort_products(&mut visible, selection);

    debug!(
        total = products.len(),
        visible = visible.len(),
        sort = %selection.sort,
        sort_by_age = selection.sort_by_age,
        "applied catalog filter"
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::DisplayText;
    use crate::seed::seed_products;
    use doudou_core::{Price, ProductId};

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id_typed().get()).collect()
    }

    fn plain(id: u64, cents: u64) -> Product {
        Product::new(
            ProductId::new(id),
            DisplayText::literal(format!("product {id}")),
            Price::from_cents(cents),
        )
    }

    #[test]
    fn default_selection_keeps_everything() {
        let products = seed_products();
        let visible = apply(&products, &FilterSelection::default());
        assert_eq!(visible.len(), products.len());
    }

    #[test]
    fn default_sort_puts_new_items_first_and_keeps_input_order() {
        let products = seed_products();
        let visible = apply(&products, &FilterSelection::default());
        assert_eq!(ids(&visible), vec![2, 4, 5, 7, 1, 3, 6, 8, 9]);
    }

    #[test]
    fn popular_sort_puts_bestsellers_first() {
        let products = seed_products();
        let mut sel = FilterSelection::default();
        sel.set_sort(SortMode::Popular);
        assert_eq!(ids(&apply(&products, &sel)), vec![1, 3, 6, 8, 2, 4, 5, 7, 9]);
    }

    #[test]
    fn budget_20_40_includes_24_90_and_excludes_65_90() {
        let products = seed_products();
        let mut sel = FilterSelection::default();
        sel.toggle_budget(BudgetRange::From20To40);
        let visible = ids(&apply(&products, &sel));
        assert!(visible.contains(&1));
        assert!(!visible.contains(&8));
        assert!(!visible.contains(&9));
    }

    #[test]
    fn price_asc_on_seed_is_non_decreasing() {
        let products = seed_products();
        let mut sel = FilterSelection::default();
        sel.set_sort(SortMode::PriceAsc);
        let visible = apply(&products, &sel);
        assert_eq!(visible.len(), 9);
        assert!(visible.windows(2).all(|w| w[0].price() <= w[1].price()));
    }

    #[test]
    fn price_desc_on_seed_is_non_increasing() {
        let products = seed_products();
        let mut sel = FilterSelection::default();
        sel.set_sort(SortMode::PriceDesc);
        let visible = apply(&products, &sel);
        assert!(visible.windows(2).all(|w| w[0].price() >= w[1].price()));
        assert_eq!(visible[0].id_typed().get(), 8);
    }

    #[test]
    fn sale_only_returns_exactly_the_sale_items_for_every_sort() {
        let products: Vec<Product> = (1..=9)
            .map(|id| {
                let p = plain(id, 1000 * id);
                if id % 3 == 0 { p.with_badge(Badge::Sale) } else { p }
            })
            .collect();

        for sort in SortMode::ALL {
            let mut sel = FilterSelection::default();
            sel.toggle_sale_only();
            sel.set_sort(*sort);
            let mut visible = ids(&apply(&products, &sel));
            visible.sort_unstable();
            assert_eq!(visible, vec![3, 6, 9], "sort mode {sort}");
        }
    }

    #[test]
    fn gender_filter_also_admits_unisex() {
        let products = seed_products();
        let mut sel = FilterSelection::default();
        sel.set_gender(Some(Gender::Boy));
        let visible = apply(&products, &sel);
        assert!(visible.iter().all(|p| p.gender() != Gender::Girl));
        assert!(visible.iter().any(|p| p.gender() == Gender::Unisex));
        assert!(visible.iter().any(|p| p.gender() == Gender::Boy));
    }

    #[test]
    fn color_filter_rejects_products_without_color() {
        let products = vec![plain(1, 1000), plain(2, 1000).with_color(Color::Roz)];
        let mut sel = FilterSelection::default();
        sel.toggle_color(Color::Roz);
        assert_eq!(ids(&apply(&products, &sel)), vec![2]);
    }

    #[test]
    fn sort_by_age_overrides_sort_mode() {
        let products = seed_products();
        let mut sel = FilterSelection::default();
        sel.toggle_sort_by_age();
        sel.set_sort(SortMode::PriceDesc);
        let visible = apply(&products, &sel);
        assert!(visible.windows(2).all(|w| w[0].age().rank() <= w[1].age().rank()));
        assert_eq!(ids(&visible), vec![1, 4, 5, 6, 2, 7, 3, 9, 8]);
    }

    #[test]
    fn impossible_selection_yields_empty_and_reset_restores() {
        let products = seed_products();
        let mut sel = FilterSelection::default();
        sel.toggle_collection("bears");
        sel.toggle_age(AgeBucket::ZeroToSixMonths);
        assert!(apply(&products, &sel).is_empty());
        assert_eq!(sel.active_count(), 2);

        sel.reset();
        assert!(sel.is_default());
        assert_eq!(apply(&products, &sel).len(), 9);
    }

    #[test]
    fn toggling_twice_removes_the_value() {
        let mut sel = FilterSelection::default();
        sel.toggle_age(AgeBucket::OneToThreeYears);
        sel.toggle_age(AgeBucket::OneToThreeYears);
        sel.toggle_collection("dolls");
        sel.toggle_collection("dolls");
        assert!(sel.is_default());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::select;

        const COLLECTION_KEYS: &[&str] = &["bears", "newborn", "dolls"];

        fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
            let row = (
                0u64..10_000,
                prop::option::of(select(Badge::ALL)),
                select(AgeBucket::ALL),
                prop::option::of(select(Color::ALL)),
                select(Gender::ALL),
                select(COLLECTION_KEYS),
            );
            prop::collection::vec(row, 0..30).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (cents, badge, age, color, gender, collection))| {
                        let mut p = plain(i as u64 + 1, cents)
                            .for_age(age)
                            .for_gender(gender)
                            .in_collection(collection);
                        if let Some(color) = color {
                            p = p.with_color(color);
                        }
                        if let Some(badge) = badge {
                            p = p.with_badge(badge);
                        }
                        p
                    })
                    .collect()
            })
        }

        fn arb_selection() -> impl Strategy<Value = FilterSelection> {
            let sets = (
                prop::collection::btree_set(select(COLLECTION_KEYS).prop_map(String::from), 0..3),
                prop::collection::btree_set(select(BudgetRange::ALL), 0..3),
                prop::collection::btree_set(select(AgeBucket::ALL), 0..3),
                prop::collection::btree_set(select(Color::ALL), 0..3),
            );
            let flags = (
                any::<bool>(),
                any::<bool>(),
                prop::option::of(select(Gender::ALL)),
                any::<bool>(),
                select(SortMode::ALL),
            );
            (sets, flags).prop_map(|((collections, budgets, ages, colors), flags)| {
                let (sale_only, new_only, gender, sort_by_age, sort) = flags;
                FilterSelection {
                    collections,
                    budgets,
                    ages,
                    colors,
                    sale_only,
                    new_only,
                    gender,
                    sort_by_age,
                    sort,
                }
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: output is a duplicate-free subset of the input.
            #[test]
            fn output_is_subset_without_duplicates(
                products in arb_catalog(),
                sel in arb_selection()
            ) {
                let visible = ids(&apply(&products, &sel));
                let mut unique = visible.clone();
                unique.sort_unstable();
                unique.dedup();
                prop_assert_eq!(unique.len(), visible.len());
                for id in &visible {
                    prop_assert!(products.iter().any(|p| p.id_typed().get() == *id));
                }
                for p in apply(&products, &sel) {
                    prop_assert!(sel.matches(p));
                }
            }

            /// Property: filtering leaves the input untouched.
            #[test]
            fn input_is_unchanged(products in arb_catalog(), sel in arb_selection()) {
                let before = products.clone();
                let _ = apply(&products, &sel);
                prop_assert_eq!(before, products);
            }

            /// Property: filtering the output again changes nothing.
            #[test]
            fn apply_is_idempotent(products in arb_catalog(), sel in arb_selection()) {
                let once: Vec<Product> = apply(&products, &sel).into_iter().cloned().collect();
                let twice = apply(&once, &sel);
                prop_assert_eq!(ids(&once.iter().collect::<Vec<_>>()), ids(&twice));
            }

            /// Property: clearing a multi-select axis never shrinks the result.
            #[test]
            fn clearing_an_axis_never_shrinks(products in arb_catalog(), sel in arb_selection()) {
                let base = apply(&products, &sel).len();

                let mut cleared = sel.clone();
                cleared.collections.clear();
                prop_assert!(apply(&products, &cleared).len() >= base);

                let mut cleared = sel.clone();
                cleared.budgets.clear();
                prop_assert!(apply(&products, &cleared).len() >= base);

                let mut cleared = sel.clone();
                cleared.ages.clear();
                prop_assert!(apply(&products, &cleared).len() >= base);

                let mut cleared = sel.clone();
                cleared.colors.clear();
                prop_assert!(apply(&products, &cleared).len() >= base);
            }

            /// Property: badge sorts keep input order among equal keys.
            #[test]
            fn badge_sorts_are_stable(products in arb_catalog(), popular in any::<bool>()) {
                let mut sel = FilterSelection::default();
                sel.set_sort(if popular { SortMode::Popular } else { SortMode::Newest });
                let badge = if popular { Badge::Bestseller } else { Badge::New };

                let visible = apply(&products, &sel);
                let (front, back): (Vec<&Product>, Vec<&Product>) =
                    visible.iter().copied().partition(|p| p.has_badge(badge));
                prop_assert!(ids(&front).windows(2).all(|w| w[0] < w[1]));
                prop_assert!(ids(&back).windows(2).all(|w| w[0] < w[1]));
                prop_assert_eq!(ids(&visible[..front.len()]), ids(&front));
            }

            /// Property: with sort_by_age set, the sort mode is irrelevant.
            #[test]
            fn sort_by_age_ignores_sort_mode(products in arb_catalog(), sel in arb_selection()) {
                let mut by_age = sel.clone();
                by_age.sort_by_age = true;
                let reference = ids(&apply(&products, &by_age));
                for sort in SortMode::ALL {
                    by_age.sort = *sort;
                    prop_assert_eq!(&ids(&apply(&products, &by_age)), &reference);
                }
            }
        }
    }
}
