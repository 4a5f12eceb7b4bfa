//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::app::dto::ProductDto;
use crate::domain::entities::{Category, CategoryId, Product, ProductId};

/// 2020-10-20T03:00:00Z
pub fn test_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 10, 20, 3, 0, 0).unwrap()
}

/// Category 2, "Electronics"
pub fn test_category() -> Category {
    test_category_named(2, "Electronics")
}

pub fn test_category_named(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        name: name.to_string(),
        created_at: Some(test_date()),
        updated_at: None,
    }
}

/// Product 1, "Phone", in `test_category()`
pub fn test_product() -> Product {
    test_product_named(1, "Phone")
}

pub fn test_product_named(id: i64, name: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        description: "Good Phone".to_string(),
        price: Decimal::new(800, 0),
        img_url: Some("https://img.com/img.png".to_string()),
        date: test_date(),
        categories: vec![test_category()],
    }
}

/// Valid DTO for `test_product()`, without an id
pub fn test_product_dto() -> ProductDto {
    let mut dto = ProductDto::from(test_product());
    dto.id = None;
    dto
}
