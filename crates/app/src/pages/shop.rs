//! Shop page: the catalog grid, its filter sidebar and sort control.

use tracing::debug;

use doudou_catalog::{
    apply, from_query, to_query, AgeBucket, BudgetRange, Color, FilterSelection, Gender, Product,
    SortMode,
};
use doudou_client::{CatalogBackend, Sourced};

use crate::pages::load_catalog;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopAction {
    ToggleCollection(String),
    ToggleBudget(BudgetRange),
    ToggleAge(AgeBucket),
    ToggleColor(Color),
    ToggleSaleOnly,
    ToggleNewOnly,
    ToggleSortByAge,
    SetGender(Option<Gender>),
    SetSort(SortMode),
    Reset,
}

impl ShopAction {
    pub fn apply_to(self, sel: &mut FilterSelection) {
        match self {
            ShopAction::ToggleCollection(key) => sel.toggle_collection(key),
            ShopAction::ToggleBudget(budget) => sel.toggle_budget(budget),
            ShopAction::ToggleAge(age) => sel.toggle_age(age),
            ShopAction::ToggleColor(color) => sel.toggle_color(color),
            ShopAction::ToggleSaleOnly => sel.toggle_sale_only(),
            ShopAction::ToggleNewOnly => sel.toggle_new_only(),
            ShopAction::ToggleSortByAge => sel.toggle_sort_by_age(),
            ShopAction::SetGender(gender) => sel.set_gender(gender),
            ShopAction::SetSort(sort) => sel.set_sort(sort),
            ShopAction::Reset => sel.reset(),
        }
    }
}

#[derive(Debug)]
pub struct ShopView<'a> {
    pub products: Vec<&'a Product>,
    pub result_count: usize,
    pub is_empty: bool,
    pub active_filters: usize,
    pub sort: SortMode,
}

#[derive(Debug, Clone)]
pub struct ShopPage {
    catalog: Sourced<Vec<Product>>,
    selection: FilterSelection,
}

impl ShopPage {
    /// Page state for `catalog`, with the filters read from `query`.
    pub fn new(catalog: Sourced<Vec<Product>>, query: &str) -> Self {
        Self { catalog, selection: from_query(query) }
    }

    pub async fn load<B: CatalogBackend + ?Sized>(backend: &B, query: &str) -> Self {
        Self::new(load_catalog(backend).await, query)
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn is_fallback(&self) -> bool {
        self.catalog.is_fallback()
    }

    pub fn dispatch(&mut self, action: ShopAction) {
        debug!(?action, "shop action");
        action.apply_to(&mut self.selection);
    }

    pub fn view(&self) -> ShopView<'_> {
        let products = apply(self.catalog.value(), &self.selection);
        ShopView {
            result_count: products.len(),
            is_empty: products.is_empty(),
            products,
            active_filters: self.selection.active_count(),
            sort: self.selection.sort,
        }
    }

    /// Shareable link for the current filters.
    pub fn route(&self) -> Route {
        Route::Shop(self.selection.clone())
    }

    pub fn query(&self) -> String {
        to_query(&self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doudou_catalog::seed_products;

    fn page(query: &str) -> ShopPage {
        ShopPage::new(Sourced::Fallback(seed_products()), query)
    }

    #[test]
    fn query_drives_the_initial_selection() {
        let page = page("age=0-6&budget=under-20");
        let view = page.view();
        assert!(view.products.iter().all(|p| p.age() == AgeBucket::ZeroToSixMonths));
        assert_eq!(view.result_count, view.products.len());
        assert_eq!(page.query(), "age=0-6&budget=under-20");
    }

    #[test]
    fn bracket_20_40_contains_24_90_but_not_65_90() {
        let mut page = page("");
        page.dispatch(ShopAction::ToggleBudget(BudgetRange::From20To40));
        let cents: Vec<u64> = page.view().products.iter().map(|p| p.price().cents()).collect();
        assert!(cents.contains(&2490));
        assert!(!cents.contains(&6590));
    }

    #[test]
    fn price_ascending_is_non_decreasing() {
        let mut page = page("");
        page.dispatch(ShopAction::SetSort(SortMode::PriceAsc));
        let view = page.view();
        assert_eq!(view.result_count, 9);
        assert!(view.products.windows(2).all(|w| w[0].price() <= w[1].price()));
    }

    #[test]
    fn empty_result_then_reset() {
        let mut page = page("collection=crocodiles");
        assert!(page.view().is_empty);

        page.dispatch(ShopAction::Reset);
        let view = page.view();
        assert!(!view.is_empty);
        assert_eq!(view.active_filters, 0);
        assert_eq!(page.route().to_string(), "/magazin");
    }

    #[test]
    fn actions_apply_in_dispatch_order() {
        let mut page = page("");
        page.dispatch(ShopAction::ToggleColor(Color::Roz));
        page.dispatch(ShopAction::ToggleColor(Color::Roz));
        page.dispatch(ShopAction::ToggleNewOnly);
        assert!(page.selection().colors.is_empty());
        assert!(page.view().products.iter().all(|p| p.has_badge(doudou_catalog::Badge::New)));
    }
}
