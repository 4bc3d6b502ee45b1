//! Client routes and the admin guard.

use core::fmt;

use doudou_catalog::{from_query, to_query, FilterSelection};
use doudou_core::ProductId;

use crate::session::AdminSession;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AdminPage {
    Dashboard,
    Products,
    Categories,
    Orders,
    Coupons,
    Login,
}

impl AdminPage {
    fn segment(self) -> &'static str {
        match self {
            AdminPage::Dashboard => "",
            AdminPage::Products => "products",
            AdminPage::Categories => "categories",
            AdminPage::Orders => "orders",
            AdminPage::Coupons => "coupons",
            AdminPage::Login => "login",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        [
            AdminPage::Dashboard,
            AdminPage::Products,
            AdminPage::Categories,
            AdminPage::Orders,
            AdminPage::Coupons,
            AdminPage::Login,
        ]
        .into_iter()
        .find(|page| page.segment() == segment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// The catalog, with the filters carried in its query string.
    Shop(FilterSelection),
    Product(ProductId),
    Cart,
    Collections,
    GiftIdeas,
    Help,
    OurStory,
    Admin(AdminPage),
}

impl Route {
    pub const SHOP_PATH: &'static str = "/magazin";

    /// Parse a path with an optional `?query`. `/catalog` is accepted as an
    /// alias of `/magazin`; unknown paths give `None`.
    pub fn parse(target: &str) -> Option<Route> {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match segments.as_slice() {
            [] | [""] => Route::Home,
            ["magazin"] | ["catalog"] => Route::Shop(from_query(query)),
            ["produs", id] => Route::Product(id.parse().ok()?),
            ["cos"] => Route::Cart,
            ["colectii"] => Route::Collections,
            ["idei-cadouri"] => Route::GiftIdeas,
            ["ajutor"] => Route::Help,
            ["povestea-noastra"] => Route::OurStory,
            ["admin"] => Route::Admin(AdminPage::Dashboard),
            ["admin", page] if !page.is_empty() => Route::Admin(AdminPage::from_segment(page)?),
            _ => return None,
        };
        Some(route)
    }

    pub fn shop() -> Route {
        Route::Shop(FilterSelection::default())
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::Admin(page) if *page != AdminPage::Login)
    }

    /// The route to show: admin pages redirect to the login page without a session.
    pub fn guard(self, session: &AdminSession) -> Route {
        if self.requires_admin() && !session.is_authenticated() {
            Route::Admin(AdminPage::Login)
        } else {
            self
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Shop(selection) => {
                f.write_str(Self::SHOP_PATH)?;
                let query = to_query(selection);
                if query.is_empty() {
                    Ok(())
                } else {
                    write!(f, "?{query}")
                }
            }
            Route::Product(id) => write!(f, "/produs/{id}"),
            Route::Cart => f.write_str("/cos"),
            Route::Collections => f.write_str("/colectii"),
            Route::GiftIdeas => f.write_str("/idei-cadouri"),
            Route::Help => f.write_str("/ajutor"),
            Route::OurStory => f.write_str("/povestea-noastra"),
            Route::Admin(AdminPage::Dashboard) => f.write_str("/admin"),
            Route::Admin(page) => write!(f, "/admin/{}", page.segment()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doudou_catalog::{AgeBucket, BudgetRange};

    #[test]
    fn every_static_route_formats_and_parses_back() {
        let routes = [
            Route::Home,
            Route::shop(),
            Route::Product(ProductId::new(7)),
            Route::Cart,
            Route::Collections,
            Route::GiftIdeas,
            Route::Help,
            Route::OurStory,
            Route::Admin(AdminPage::Dashboard),
            Route::Admin(AdminPage::Products),
            Route::Admin(AdminPage::Categories),
            Route::Admin(AdminPage::Orders),
            Route::Admin(AdminPage::Coupons),
            Route::Admin(AdminPage::Login),
        ];
        for route in routes {
            let path = route.to_string();
            assert_eq!(Route::parse(&path), Some(route), "{path}");
        }
    }

    #[test]
    fn shop_route_carries_the_catalog_query() {
        let route = Route::parse("/magazin?age=0-6&budget=under-20").unwrap();
        let Route::Shop(selection) = &route else {
            panic!("expected shop route, got {route:?}");
        };
        assert!(selection.ages.contains(&AgeBucket::ZeroToSixMonths));
        assert!(selection.budgets.contains(&BudgetRange::Under20));
        assert_eq!(route.to_string(), "/magazin?age=0-6&budget=under-20");
    }

    #[test]
    fn aliases_and_trailing_slashes() {
        assert_eq!(Route::parse("/catalog"), Some(Route::shop()));
        assert_eq!(Route::parse("/cos/"), Some(Route::Cart));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/admin/"), Some(Route::Admin(AdminPage::Dashboard)));
    }

    #[test]
    fn unknown_paths_and_bad_ids() {
        assert_eq!(Route::parse("/produs/abc"), None);
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/admin/settings"), None);
    }

    #[test]
    fn admin_pages_need_a_session() {
        let anonymous = AdminSession::new();
        assert_eq!(
            Route::Admin(AdminPage::Orders).guard(&anonymous),
            Route::Admin(AdminPage::Login)
        );
        assert_eq!(
            Route::Admin(AdminPage::Login).guard(&anonymous),
            Route::Admin(AdminPage::Login)
        );
        assert_eq!(Route::Cart.guard(&anonymous), Route::Cart);
        assert!(!Route::Admin(AdminPage::Login).requires_admin());
    }
}
