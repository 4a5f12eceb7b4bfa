//! Reference catalog
//!
//! Three categories and 25 products, inserted in a fixed order so a fresh
//! database assigns ids 1..=3 and 1..=25. Product 5 is referenced by an
//! order item and therefore cannot be deleted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, Set,
    TransactionTrait,
};

use crate::entity::{categories, order_items, product_categories, products};
use crate::error::DomainError;

const CATEGORIES: [&str; 3] = ["Livros", "Eletrônicos", "Computadores"];

const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
    sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

const IMG_BASE: &str =
    "https://raw.githubusercontent.com/devsuperior/dscatalog-resources/master/backend/img";

/// (name, price in cents, category positions into `CATEGORIES`)
const PRODUCTS: [(&str, i64, &[usize]); 25] = [
    ("The Lord of the Rings", 9050, &[1]),
    ("Smart TV", 219000, &[0, 2]),
    ("Macbook Pro", 125000, &[2]),
    ("PC Gamer", 120000, &[2]),
    ("Rails for Dummies", 10099, &[2]),
    ("PC Gamer Ex", 135000, &[2]),
    ("PC Gamer X", 135000, &[2]),
    ("PC Gamer Alfa", 185000, &[2]),
    ("PC Gamer Tera", 195000, &[2]),
    ("PC Gamer Y", 170000, &[2]),
    ("PC Gamer Nitro", 145000, &[2]),
    ("PC Gamer Card", 185000, &[2]),
    ("PC Gamer Plus", 135000, &[2]),
    ("PC Gamer Hera", 225000, &[2]),
    ("PC Gamer Weed", 220000, &[2]),
    ("PC Gamer Max", 234000, &[2]),
    ("PC Gamer Turbo", 128000, &[2]),
    ("PC Gamer Hot", 145000, &[2]),
    ("PC Gamer Ez", 175000, &[2]),
    ("PC Gamer Tr", 165000, &[2]),
    ("PC Gamer Tx", 168000, &[2]),
    ("PC Gamer Er", 185000, &[2]),
    ("PC Gamer Min", 225000, &[2]),
    ("PC Gamer Boo", 235000, &[2]),
    ("PC Gamer Foo", 417000, &[2]),
];

/// Position of the product that an order item points at
const DEPENDENT_PRODUCT: usize = 4;

/// Load the reference catalog unless products already exist.
///
/// Returns whether anything was inserted.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<bool, DomainError> {
    let existing = products::Entity::find().count(db).await?;
    if existing > 0 {
        tracing::info!(products = existing, "Catalog already populated, skipping seed");
        return Ok(false);
    }

    let now = Utc::now();
    let txn = db.begin().await?;

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let category = categories::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            created_at: Set(Some(now)),
            updated_at: Set(None),
        }
        .insert(&txn)
        .await?;
        category_ids.push(category.id);
    }

    let mut product_ids = Vec::with_capacity(PRODUCTS.len());
    let mut links = Vec::new();
    for (position, (name, cents, category_positions)) in PRODUCTS.iter().enumerate() {
        let product = products::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            description: Set(DESCRIPTION.to_string()),
            price: Set(Decimal::new(*cents, 2)),
            img_url: Set(Some(format!("{}/{}-big.jpg", IMG_BASE, position + 1))),
            date: Set(release_date(position)),
        }
        .insert(&txn)
        .await?;

        links.extend(
            category_positions
                .iter()
                .map(|&category| product_categories::ActiveModel {
                    product_id: Set(product.id),
                    category_id: Set(category_ids[category]),
                }),
        );
        product_ids.push(product.id);
    }

    product_categories::Entity::insert_many(links)
        .exec_without_returning(&txn)
        .await?;

    order_items::ActiveModel {
        id: NotSet,
        product_id: Set(product_ids[DEPENDENT_PRODUCT]),
        quantity: Set(1),
        price: Set(Decimal::new(PRODUCTS[DEPENDENT_PRODUCT].1, 2)),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!(
        categories = category_ids.len(),
        products = product_ids.len(),
        "Seeded reference catalog"
    );
    Ok(true)
}

/// 2020-07-13T20:50:07Z
const RELEASE_EPOCH_SECS: i64 = 1_594_673_407;

fn release_date(position: usize) -> DateTime<Utc> {
    DateTime::from_timestamp(RELEASE_EPOCH_SECS + position as i64 * 3600, 0).unwrap_or_default()
}
