//! SeaORM entities
//!
//! Table definitions for the catalog schema. Domain types live in
//! `domain::entities`; the SQL adapter converts between the two.

pub mod categories;
pub mod order_items;
pub mod product_categories;
pub mod products;
