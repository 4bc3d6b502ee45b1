//! Back-office fixture data, served whenever the backend is unavailable.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use doudou_core::{CategoryId, CouponId, OrderId, Price, ProductId};

use crate::category::Category;
use crate::coupon::Coupon;
use crate::order::{Customer, Order, OrderItem, OrderStatus};
use crate::product::{AdminProduct, ProductImage, ProductStatus, Promotion};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).single().unwrap_or_default()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn money(units: u64, cents: u64) -> Price {
    Price::from_cents(units * 100 + cents)
}

pub fn mock_categories() -> Vec<Category> {
    let row = |id: u64, name: &str, slug: &str, description: &str, count: u32| Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
        product_count: count,
        created_at: at(2024, 1, id as u32, 0, 0),
        updated_at: at(2024, 1, 14 + id as u32, 0, 0),
    };
    vec![
        row(1, "Jucării de Pluș", "jucarii-plus", "Jucării moi și pufoase", 12),
        row(2, "Pături", "paturi", "Pături pentru bebeluși", 8),
        row(3, "Cadouri", "cadouri", "Seturi cadou speciale", 5),
        row(4, "Organic", "organic", "Produse din materiale organice", 6),
    ]
}

pub fn mock_products() -> Vec<AdminProduct> {
    struct Row {
        id: u64,
        name: &'static str,
        description: &'static str,
        price: u64,
        promotion: Option<(u64, NaiveDate, NaiveDate)>,
        stock: u32,
        status: ProductStatus,
        category: u64,
        image: &'static str,
        alt: &'static str,
    }

    let rows = [
        Row {
            id: 1,
            name: "Ursuleț Maro Catifelat",
            description: "Un ursuleț adorabil, perfect pentru somn și joacă.",
            price: 45,
            promotion: Some((39, day(2024, 1, 20), day(2024, 2, 20))),
            stock: 25,
            status: ProductStatus::Active,
            category: 1,
            image: "/assets/product-bear.jpg",
            alt: "Ursuleț Maro",
        },
        Row {
            id: 2,
            name: "Iepuraș Roz Puffy",
            description: "Iepuraș de pluș cu urechi lungi și blană moale.",
            price: 52,
            promotion: None,
            stock: 18,
            status: ProductStatus::Active,
            category: 1,
            image: "/assets/product-bunny.jpg",
            alt: "Iepuraș Roz",
        },
        Row {
            id: 3,
            name: "Cerb Nordic Elegant",
            description: "Cerb de pluș cu design scandinav minimalist.",
            price: 58,
            promotion: None,
            stock: 12,
            status: ProductStatus::Active,
            category: 1,
            image: "/assets/product-deer.jpg",
            alt: "Cerb Nordic",
        },
        Row {
            id: 4,
            name: "Elefant Gri Moale",
            description: "Elefant de pluș cu urechi mari și trompa adorabilă.",
            price: 48,
            promotion: None,
            stock: 0,
            status: ProductStatus::Hidden,
            category: 1,
            image: "/assets/product-elephant.jpg",
            alt: "Elefant Gri",
        },
        Row {
            id: 5,
            name: "Pătură Crem cu Stele",
            description: "Pătură moale din bumbac organic cu model de stele.",
            price: 65,
            promotion: Some((55, day(2024, 1, 15), day(2024, 2, 15))),
            stock: 30,
            status: ProductStatus::Active,
            category: 2,
            image: "/assets/collection-clair-lune.jpg",
            alt: "Pătură Crem",
        },
        Row {
            id: 6,
            name: "Lup Cenușiu Prietenos",
            description: "Lup de pluș cu expresie prietenoasă și blană moale.",
            price: 55,
            promotion: None,
            stock: 8,
            status: ProductStatus::Draft,
            category: 1,
            image: "/assets/product-wolf.jpg",
            alt: "Lup Cenușiu",
        },
    ];

    rows.into_iter()
        .map(|r| AdminProduct {
            id: ProductId::new(r.id),
            name: r.name.to_string(),
            description: r.description.to_string(),
            price: Price::from_units(r.price),
            promotion: r.promotion.map(|(price, start, end)| Promotion {
                price: Price::from_units(price),
                start,
                end,
            }),
            stock_quantity: r.stock,
            status: r.status,
            category_id: CategoryId::new(r.category),
            category: None,
            images: vec![ProductImage {
                id: r.id,
                url: r.image.to_string(),
                alt: r.alt.to_string(),
                is_primary: true,
            }],
            created_at: at(2024, 1, 9 + r.id as u32, 0, 0),
            updated_at: at(2024, 1, 19 + r.id as u32, 0, 0),
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: u64,
    first: &str,
    last: &str,
    email: &str,
    phone: Option<&str>,
    address: &str,
    city: &str,
    postal: &str,
) -> Customer {
    Customer {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        address: address.to_string(),
        city: city.to_string(),
        postal_code: postal.to_string(),
        country: "România".to_string(),
    }
}

fn item(id: u64, product: u64, name: &str, image: &str, quantity: u32, unit: Price) -> OrderItem {
    OrderItem {
        id,
        product_id: ProductId::new(product),
        product_name: name.to_string(),
        product_image: image.to_string(),
        quantity,
        unit_price: unit,
        total_price: unit.times(quantity),
    }
}

pub fn mock_orders() -> Vec<Order> {
    let order = |id: u64,
                 customer: Customer,
                 items: Vec<OrderItem>,
                 discount: Price,
                 status: OrderStatus,
                 coupon: Option<&str>,
                 created_at: DateTime<Utc>,
                 updated_at: DateTime<Utc>| {
        let subtotal: Price = items.iter().map(|i| i.total_price).sum();
        Order {
            id: OrderId::new(id),
            order_number: Order::number_for(OrderId::new(id), created_at),
            customer,
            items,
            subtotal,
            discount,
            total: subtotal.saturating_sub(discount),
            status,
            coupon_code: coupon.map(str::to_string),
            notes: None,
            created_at,
            updated_at,
        }
    };

    vec![
        order(
            1,
            customer(
                1,
                "Maria",
                "Popescu",
                "maria.popescu@email.com",
                Some("+40 721 234 567"),
                "Str. Florilor 12",
                "București",
                "010101",
            ),
            vec![
                item(
                    1,
                    1,
                    "Ursuleț Maro Catifelat",
                    "/assets/product-bear.jpg",
                    2,
                    Price::from_units(39),
                ),
                item(
                    2,
                    3,
                    "Cerb Nordic Elegant",
                    "/assets/product-deer.jpg",
                    1,
                    Price::from_units(58),
                ),
            ],
            Price::ZERO,
            OrderStatus::New,
            None,
            at(2024, 1, 25, 10, 30),
            at(2024, 1, 25, 10, 30),
        ),
        order(
            2,
            customer(
                2,
                "Ion",
                "Ionescu",
                "ion.ionescu@email.com",
                Some("+40 722 345 678"),
                "Bd. Unirii 45",
                "Cluj-Napoca",
                "400001",
            ),
            vec![item(
                3,
                2,
                "Iepuraș Roz Puffy",
                "/assets/product-bunny.jpg",
                1,
                Price::from_units(52),
            )],
            money(5, 20),
            OrderStatus::Processing,
            Some("WELCOME10"),
            at(2024, 1, 24, 14, 15),
            at(2024, 1, 25, 9, 0),
        ),
        order(
            3,
            customer(
                3,
                "Elena",
                "Vasilescu",
                "elena.v@email.com",
                None,
                "Str. Primăverii 8",
                "Timișoara",
                "300001",
            ),
            vec![item(
                4,
                5,
                "Pătură Crem cu Stele",
                "/assets/collection-clair-lune.jpg",
                2,
                Price::from_units(55),
            )],
            Price::ZERO,
            OrderStatus::Completed,
            None,
            at(2024, 1, 20, 16, 45),
            at(2024, 1, 23, 11, 0),
        ),
        order(
            4,
            customer(
                4,
                "Andrei",
                "Munteanu",
                "andrei.m@email.com",
                None,
                "Aleea Rozelor 3",
                "Iași",
                "700001",
            ),
            vec![item(
                5,
                1,
                "Ursuleț Maro Catifelat",
                "/assets/product-bear.jpg",
                1,
                Price::from_units(39),
            )],
            Price::ZERO,
            OrderStatus::New,
            None,
            at(2024, 1, 25, 8, 0),
            at(2024, 1, 25, 8, 0),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn coupon_row(
    id: u64,
    code: &str,
    percent: u8,
    from: NaiveDate,
    to: NaiveDate,
    active: bool,
    used: u32,
    max: Option<u32>,
    created: DateTime<Utc>,
) -> Coupon {
    Coupon {
        id: CouponId::new(id),
        code: code.to_string(),
        discount_percent: percent,
        valid_from: from,
        valid_to: to,
        is_active: active,
        usage_count: used,
        max_usage: max,
        created_at: created,
    }
}

pub fn mock_coupons() -> Vec<Coupon> {
    vec![
        coupon_row(
            1,
            "WELCOME10",
            10,
            day(2024, 1, 1),
            day(2024, 12, 31),
            true,
            45,
            Some(100),
            at(2024, 1, 1, 0, 0),
        ),
        coupon_row(
            2,
            "SPRING20",
            20,
            day(2024, 3, 1),
            day(2024, 5, 31),
            true,
            0,
            Some(50),
            at(2024, 2, 15, 0, 0),
        ),
        coupon_row(
            3,
            "VIP15",
            15,
            day(2024, 1, 1),
            day(2024, 6, 30),
            false,
            23,
            None,
            at(2024, 1, 1, 0, 0),
        ),
    ]
}
