//! Category service

use std::sync::Arc;

use async_trait::async_trait;

use crate::app::dto::CategoryDto;
use crate::domain::entities::{CategoryDraft, CategoryId, Page, PageRequest};
use crate::domain::ports::CategoryRepository;
use crate::error::{AppError, DomainError};

/// Category operations exposed to the HTTP layer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryUseCases: Send + Sync {
    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<CategoryDto>, AppError>;

    async fn find_by_id(&self, id: CategoryId) -> Result<CategoryDto, AppError>;

    async fn insert(&self, dto: CategoryDto) -> Result<CategoryDto, AppError>;

    async fn update(&self, id: CategoryId, dto: CategoryDto) -> Result<CategoryDto, AppError>;

    /// Fails with a database error while products still reference the category
    async fn delete(&self, id: CategoryId) -> Result<(), AppError>;
}

/// Service for managing categories
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    categories: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    pub fn new(categories: Arc<CR>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl<CR> CategoryUseCases for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<CategoryDto>, AppError> {
        let page = self.categories.find_all(&request).await?;
        Ok(page.map(CategoryDto::from))
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<CategoryDto, AppError> {
        self.categories
            .find_by_id(id)
            .await?
            .map(CategoryDto::from)
            .ok_or_else(|| id_not_found(id))
    }

    async fn insert(&self, dto: CategoryDto) -> Result<CategoryDto, AppError> {
        dto.validate()?;

        let category = self
            .categories
            .save(&CategoryDraft {
                id: None,
                name: dto.name,
            })
            .await?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category.into())
    }

    async fn update(&self, id: CategoryId, dto: CategoryDto) -> Result<CategoryDto, AppError> {
        dto.validate()?;

        let reference = self
            .categories
            .get_reference(id)
            .await
            .map_err(|e| translate_missing(e, id))?;

        let category = self
            .categories
            .save(&CategoryDraft {
                id: Some(reference.id()),
                name: dto.name,
            })
            .await
            .map_err(|e| translate_missing(e, id))?;

        tracing::info!(category_id = %id, "Category updated");
        Ok(category.into())
    }

    async fn delete(&self, id: CategoryId) -> Result<(), AppError> {
        match self.categories.delete_by_id(id).await {
            Ok(()) => {
                tracing::info!(category_id = %id, "Category deleted");
                Ok(())
            }
            Err(DomainError::NotFound(_)) => Err(id_not_found(id)),
            Err(DomainError::IntegrityViolation(detail)) => {
                tracing::warn!(category_id = %id, detail = %detail, "Category delete rejected, still referenced");
                Err(AppError::Database("Integrity violation".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn id_not_found(id: CategoryId) -> AppError {
    AppError::ResourceNotFound(format!("Id not found {}", id))
}

fn translate_missing(e: DomainError, id: CategoryId) -> AppError {
    match e {
        DomainError::NotFound(_) => id_not_found(id),
        e => e.into(),
    }
}
