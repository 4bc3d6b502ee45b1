use doudou_core::{Price, ProductId};

use crate::cart::Cart;
use crate::locale::Locale;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub unit_price: Price,
    pub quantity: u32,
    pub line_total: Price,
    pub link: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total_items: u32,
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    pub is_empty: bool,
    /// Where the "continue shopping" button leads.
    pub continue_shopping: Route,
}

impl CartView {
    pub fn build(cart: &Cart, locale: &Locale) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| CartLine {
                id: item.id,
                name: locale.text(&item.name),
                image: item.image.clone(),
                unit_price: item.price,
                quantity: item.quantity,
                line_total: item.line_total(),
                link: Route::Product(item.id),
            })
            .collect();

        CartView {
            lines,
            total_items: cart.total_items(),
            subtotal: cart.subtotal(),
            shipping: cart.shipping(),
            total: cart.total(),
            is_empty: cart.is_empty(),
            continue_shopping: Route::shop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doudou_catalog::{DisplayText, Product};

    #[test]
    fn empty_cart_view() {
        let view = CartView::build(&Cart::new(), &Locale::default());
        assert!(view.is_empty);
        assert_eq!(view.total, Price::ZERO);
        assert_eq!(view.continue_shopping.to_string(), "/magazin");
    }

    #[test]
    fn lines_resolve_names_and_totals() {
        let keyed =
            Product::new(ProductId::new(1), DisplayText::key("color.roz"), Price::from_cents(1250));
        let plain =
            Product::new(ProductId::new(2), DisplayText::literal("Urs"), Price::from_units(30));
        let mut cart = Cart::new();
        cart.add(&keyed, 2);
        cart.add(&plain, 1);

        let view = CartView::build(&cart, &Locale::default());
        assert_eq!(view.lines[0].name, "Roz");
        assert_eq!(view.lines[0].line_total, Price::from_units(25));
        assert_eq!(view.lines[1].link.to_string(), "/produs/2");
        assert_eq!(view.subtotal, Price::from_units(55));
        assert_eq!(view.shipping, Price::ZERO);
        assert_eq!(view.total, view.subtotal);
        assert_eq!(view.total_items, 3);
    }
}
