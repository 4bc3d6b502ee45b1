use std::path::PathBuf;

use anyhow::Context;

use doudou_app::pages::admin::{DashboardPage, OrdersPage};
use doudou_app::pages::cart::CartView;
use doudou_app::pages::load_catalog;
use doudou_app::pages::product::ProductPage;
use doudou_app::pages::shop::ShopPage;
use doudou_app::{AdminPage, App, AppConfig, FileStore, Route};
use doudou_catalog::Product;

const CONFIG_VAR: &str = "DOUDOU_CONFIG";
const STATE_VAR: &str = "DOUDOU_STATE";

fn print_products<'a>(app: &App<FileStore>, products: impl IntoIterator<Item = &'a Product>) {
    for p in products {
        println!("  #{:<3} {:<32} {:>8}", p.id_typed(), app.locale.text(p.name()), p.price());
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var_os(CONFIG_VAR) {
        Some(path) => AppConfig::from_file(&PathBuf::from(path))?,
        None => AppConfig::from_env(),
    };
    doudou_observability::init(&config.log);

    let state = std::env::var_os(STATE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("doudou-state.json"));
    let store = FileStore::open(&state)
        .with_context(|| format!("opening state file {}", state.display()))?;
    let app = App::bootstrap(config, store)?;

    let target = std::env::args().nth(1).unwrap_or_else(|| Route::SHOP_PATH.to_string());
    let route = app.resolve(&target).with_context(|| format!("no page at {target}"))?;
    println!("{route}");

    match route {
        Route::Shop(_) => {
            let query = target.split_once('?').map(|(_, q)| q).unwrap_or_default();
            let page = ShopPage::load(&app.backend, query).await;
            let view = page.view();
            println!("{} {}", view.result_count, app.locale.t("shop.results"));
            if view.is_empty {
                println!("{}", app.locale.t("shop.noResults"));
            }
            print_products(&app, view.products);
        }
        Route::Product(id) => {
            let catalog = load_catalog(&app.backend).await.into_inner();
            match ProductPage::load(&app.backend, id, &catalog).await {
                ProductPage::Found { product, related } => {
                    print_products(&app, [&product]);
                    println!("{}", app.locale.t("product.youMayLike"));
                    print_products(&app, &related);
                }
                ProductPage::NotFound { back } => {
                    println!("{} ({back})", app.locale.t("product.notFound"));
                }
            }
        }
        Route::Cart => {
            let view = CartView::build(&app.cart, &app.locale);
            for line in &view.lines {
                println!("  {} x{} {}", line.name, line.quantity, line.line_total);
            }
            println!("{}: {}", app.locale.t("cart.total"), view.total);
        }
        Route::Admin(AdminPage::Dashboard) => {
            let stats = DashboardPage::load(&app.backend, &app.session, &app.admin).await?;
            let s = stats.value();
            println!(
                "products {}/{} orders {} revenue {}{}",
                s.active_products,
                s.total_products,
                s.total_orders,
                s.total_revenue,
                if stats.is_fallback() { " (local)" } else { "" }
            );
        }
        Route::Admin(AdminPage::Orders) => {
            let page = OrdersPage::load(&app.backend, &app.session).await?;
            for order in page.visible() {
                println!(
                    "  {} {:<24} {:>10} {}",
                    order.order_number,
                    order.customer.full_name(),
                    order.total,
                    order.status
                );
            }
        }
        _ => {}
    }
    Ok(())
}
