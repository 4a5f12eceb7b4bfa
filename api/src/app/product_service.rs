//! Product service
//!
//! Orchestrates the product and category repositories: maps entities to
//! transfer objects, validates input, resolves category references and
//! translates persistence failures into `AppError`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::app::dto::ProductDto;
use crate::domain::entities::{
    CategoryId, CategoryRef, Page, PageRequest, ProductDraft, ProductId,
};
use crate::domain::ports::{CategoryRepository, ProductRepository};
use crate::error::{AppError, DomainError};

/// Product operations exposed to the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductUseCases: Send + Sync {
    /// One page of products; an empty page is not an error
    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<ProductDto>, AppError>;

    async fn find_by_id(&self, id: ProductId) -> Result<ProductDto, AppError>;

    /// Create a product; any id in the DTO is ignored
    async fn insert(&self, dto: ProductDto) -> Result<ProductDto, AppError>;

    /// Overwrite every field and the category set of an existing product
    async fn update(&self, id: ProductId, dto: ProductDto) -> Result<ProductDto, AppError>;

    /// Delete a product that nothing else references
    async fn delete(&self, id: ProductId) -> Result<(), AppError>;
}

/// Service for managing products
pub struct ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    products: Arc<PR>,
    categories: Arc<CR>,
}

impl<PR, CR> ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    pub fn new(products: Arc<PR>, categories: Arc<CR>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Turn the DTO's category summaries into checked references
    async fn resolve_categories(&self, dto: &ProductDto) -> Result<Vec<CategoryRef>, AppError> {
        let mut refs = Vec::with_capacity(dto.categories.len());
        for category in &dto.categories {
            let Some(id) = category.id else {
                continue;
            };
            let reference = self.categories.get_reference(CategoryId(id)).await?;
            if !refs.contains(&reference) {
                refs.push(reference);
            }
        }
        Ok(refs)
    }
}

#[async_trait]
impl<PR, CR> ProductUseCases for ProductService<PR, CR>
where
    PR: ProductRepository,
    CR: CategoryRepository,
{
    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<ProductDto>, AppError> {
        let page = self.products.find_all(&request).await?;
        Ok(page.map(ProductDto::from))
    }

    async fn find_by_id(&self, id: ProductId) -> Result<ProductDto, AppError> {
        self.products
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| id_not_found(id))
    }

    async fn insert(&self, dto: ProductDto) -> Result<ProductDto, AppError> {
        dto.validate(Utc::now())?;

        let categories = self.resolve_categories(&dto).await?;
        let product = self.products.save(&to_draft(None, dto, categories)).await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product.into())
    }

    async fn update(&self, id: ProductId, dto: ProductDto) -> Result<ProductDto, AppError> {
        dto.validate(Utc::now())?;

        let reference = self
            .products
            .get_reference(id)
            .await
            .map_err(|e| translate_missing(e, id))?;
        let categories = self.resolve_categories(&dto).await?;

        let product = self
            .products
            .save(&to_draft(Some(reference.id()), dto, categories))
            .await
            .map_err(|e| translate_missing(e, id))?;

        tracing::info!(product_id = %id, "Product updated");
        Ok(product.into())
    }

    async fn delete(&self, id: ProductId) -> Result<(), AppError> {
        match self.products.delete_by_id(id).await {
            Ok(()) => {
                tracing::info!(product_id = %id, "Product deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(id_not_found(id)),
            Err(DomainError::IntegrityViolation(detail)) => {
                tracing::warn!(product_id = %id, detail = %detail, "Product delete rejected, still referenced");
                Err(AppError::Database("Integrity violation".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn id_not_found(id: ProductId) -> AppError {
    AppError::ResourceNotFound(format!("Id not found {}", id))
}

fn translate_missing(e: DomainError, id: ProductId) -> AppError {
    match e {
        DomainError::NotFound(_) => id_not_found(id),
        e => e.into(),
    }
}

fn to_draft(id: Option<ProductId>, dto: ProductDto, categories: Vec<CategoryRef>) -> ProductDraft {
    ProductDraft {
        id,
        name: dto.name,
        description: dto.description,
        price: dto.price,
        img_url: dto.img_url,
        date: dto.date,
        categories,
    }
}
