//! Transfer objects
//!
//! Wire projections of the domain entities, exchanged at the service
//! boundary. Field names are camelCase on the wire (`imgUrl`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, Product};
use crate::error::{AppError, FieldMessage};

pub const PRODUCT_NAME_MIN: usize = 5;
pub const PRODUCT_NAME_MAX: usize = 60;

/// Largest price a `DECIMAL(10,2)` column holds, 99 999 999.99
pub const PRODUCT_PRICE_MAX: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);
pub const PRODUCT_PRICE_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(default)]
    pub id: Option<i64>,
    /// Ignored when the DTO is only used to reference a category
    #[serde(default)]
    pub name: String,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(vec![FieldMessage::new(
                "name",
                "Name is required",
            )]));
        }
        Ok(())
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: Some(category.id.0),
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Assigned by the store; ignored on insert and update
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub img_url: Option<String>,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
}

impl ProductDto {
    /// Check every field and report all violations at once
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), AppError> {
        let mut errors = Vec::new();

        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            errors.push(FieldMessage::new("name", "Name is required"));
        } else if !(PRODUCT_NAME_MIN..=PRODUCT_NAME_MAX).contains(&name_len) {
            errors.push(FieldMessage::new(
                "name",
                "Name must be between 5 and 60 characters",
            ));
        }

        if self.description.trim().is_empty() {
            errors.push(FieldMessage::new("description", "Description is required"));
        }

        if self.price <= Decimal::ZERO {
            errors.push(FieldMessage::new("price", "Price must be positive"));
        } else if self.price > PRODUCT_PRICE_MAX {
            errors.push(FieldMessage::new(
                "price",
                "Price must not exceed 99999999.99",
            ));
        } else if self.price.normalize().scale() > PRODUCT_PRICE_SCALE {
            errors.push(FieldMessage::new(
                "price",
                "Price must have at most 2 decimal places",
            ));
        }

        if self.date > now {
            errors.push(FieldMessage::new("date", "Date cannot be in the future"));
        }

        if self.categories.is_empty() {
            errors.push(FieldMessage::new(
                "categories",
                "Product must have at least one category",
            ));
        } else if self.categories.iter().any(|c| c.id.is_none()) {
            errors.push(FieldMessage::new("categories", "Category id is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id.0),
            name: product.name,
            description: product.description,
            price: product.price,
            img_url: product.img_url,
            date: product.date,
            categories: product
                .categories
                .into_iter()
                .map(CategoryDto::from)
                .collect(),
        }
    }
}
