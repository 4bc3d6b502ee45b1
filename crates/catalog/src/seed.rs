//! Static seed catalog, shown whenever the backend has nothing to offer.

use doudou_core::{Price, ProductId};

use crate::options::{AgeBucket, Badge, Color, Gender, ProductType, StockStatus};
use crate::product::{DisplayText, Product};

struct SeedRow {
    id: u64,
    name: &'static str,
    cents: u64,
    image: &'static str,
    badge: Option<Badge>,
    stock: StockStatus,
    product_type: ProductType,
    age: AgeBucket,
    color: Color,
    collection: &'static str,
    gender: Gender,
    description: &'static str,
    reviews: u32,
    rating: f32,
}

const ROWS: &[SeedRow] = &[
    SeedRow {
        id: 1,
        name: "Iepuraș Bonbon Roz",
        cents: 2490,
        image: "assets/product-pink-bunny.jpg",
        badge: Some(Badge::Bestseller),
        stock: StockStatus::InStock,
        product_type: ProductType::Doudous,
        age: AgeBucket::ZeroToSixMonths,
        color: Color::Roz,
        collection: "newborn",
        gender: Gender::Girl,
        description: "Un adorabil iepuraș roz, perfect pentru cei mai mici. Fabricat din materiale moi și sigure pentru bebeluși.",
        reviews: 18,
        rating: 4.8,
    },
    SeedRow {
        id: 2,
        name: "Urs Lună Plină",
        cents: 3490,
        image: "assets/product-grey-bear.jpg",
        badge: Some(Badge::New),
        stock: StockStatus::InStock,
        product_type: ProductType::Plush,
        age: AgeBucket::SixToTwelveMonths,
        color: Color::Gri,
        collection: "bears",
        gender: Gender::Unisex,
        description: "Un ursuleț gri cu expresie blândă, perfect pentru îmbrățișări. Material premium, hipoalergenic.",
        reviews: 24,
        rating: 4.9,
    },
    SeedRow {
        id: 3,
        name: "Marionetă Lup",
        cents: 1990,
        image: "assets/product-wolf.jpg",
        badge: Some(Badge::Bestseller),
        stock: StockStatus::Limited,
        product_type: ProductType::Puppets,
        age: AgeBucket::OneToThreeYears,
        color: Color::Gri,
        collection: "dolls",
        gender: Gender::Boy,
        description: "Marionetă de mână în formă de lup, perfectă pentru jocuri creative și povești.",
        reviews: 12,
        rating: 4.7,
    },
    SeedRow {
        id: 4,
        name: "Cutie Muzicală Stea",
        cents: 2990,
        image: "assets/product-music-box.jpg",
        badge: Some(Badge::New),
        stock: StockStatus::InStock,
        product_type: ProductType::MusicBoxes,
        age: AgeBucket::ZeroToSixMonths,
        color: Color::Bej,
        collection: "newborn",
        gender: Gender::Unisex,
        description: "Cutie muzicală delicată cu melodie liniștitoare. Perfect pentru adormit bebelușii.",
        reviews: 31,
        rating: 5.0,
    },
    SeedRow {
        id: 5,
        name: "Pui de Cerb Boh'aime",
        cents: 2790,
        image: "assets/product-deer.jpg",
        badge: Some(Badge::New),
        stock: StockStatus::InStock,
        product_type: ProductType::Doudous,
        age: AgeBucket::ZeroToSixMonths,
        color: Color::Bej,
        collection: "newborn",
        gender: Gender::Unisex,
        description: "Un pui de cerb adorabil din colecția Boh'aime, cu material moale și detalii fine.",
        reviews: 15,
        rating: 4.6,
    },
    SeedRow {
        id: 6,
        name: "Iepuraș Floricică",
        cents: 2290,
        image: "assets/product-bunny.jpg",
        badge: Some(Badge::Bestseller),
        stock: StockStatus::InStock,
        product_type: ProductType::Doudous,
        age: AgeBucket::ZeroToSixMonths,
        color: Color::Roz,
        collection: "newborn",
        gender: Gender::Girl,
        description: "Iepuraș cu imprimeu floral, moale și perfect pentru bebeluși.",
        reviews: 27,
        rating: 4.9,
    },
    SeedRow {
        id: 7,
        name: "Elefant Boh'aime",
        cents: 4590,
        image: "assets/product-elephant.jpg",
        badge: Some(Badge::New),
        stock: StockStatus::InStock,
        product_type: ProductType::Plush,
        age: AgeBucket::SixToTwelveMonths,
        color: Color::Albastru,
        collection: "elephants",
        gender: Gender::Boy,
        description: "Elefant mare din colecția Boh'aime, ideal pentru decorarea camerei sau pentru joacă.",
        reviews: 9,
        rating: 4.8,
    },
    SeedRow {
        id: 8,
        name: "Urs Bonbon Maro",
        cents: 6590,
        image: "assets/product-bear.jpg",
        badge: Some(Badge::Bestseller),
        stock: StockStatus::Limited,
        product_type: ProductType::Doudous,
        age: AgeBucket::ThreePlusYears,
        color: Color::Bej,
        collection: "bears",
        gender: Gender::Unisex,
        description: "Ursuleț premium din colecția Bonbon, cu materiale de cea mai înaltă calitate.",
        reviews: 42,
        rating: 5.0,
    },
    SeedRow {
        id: 9,
        name: "Cățeluș Dormitor",
        cents: 1590,
        image: "assets/product-puppy.jpg",
        badge: None,
        stock: StockStatus::InStock,
        product_type: ProductType::Plush,
        age: AgeBucket::OneToThreeYears,
        color: Color::Bej,
        collection: "puppies",
        gender: Gender::Unisex,
        description: "Un cățeluș adorabil în poziție de somn, perfect pentru copiii mici.",
        reviews: 8,
        rating: 4.5,
    },
];

fn build(row: &SeedRow) -> Product {
    let product = Product::new(
        ProductId::new(row.id),
        DisplayText::literal(row.name),
        Price::from_cents(row.cents),
    )
    .with_description(DisplayText::literal(row.description))
    .with_image(row.image)
    .with_stock(row.stock)
    .of_type(row.product_type)
    .for_age(row.age)
    .with_color(row.color)
    .in_collection(row.collection)
    .for_gender(row.gender)
    .with_reviews(row.reviews, row.rating);

    match row.badge {
        Some(badge) => product.with_badge(badge),
        None => product,
    }
}

/// The nine-product seed catalog, in catalog order.
pub fn seed_products() -> Vec<Product> {
    ROWS.iter().map(build).collect()
}

/// Look up a seed product, as the product page does before asking the backend.
pub fn seed_product(id: ProductId) -> Option<Product> {
    ROWS.iter().find(|row| row.id == id.get()).map(build)
}
