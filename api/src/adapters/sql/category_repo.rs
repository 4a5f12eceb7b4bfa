//! SQL adapter for CategoryRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, Order, PaginatorTrait, QueryOrder,
    QuerySelect, Select, Set,
};

use crate::domain::entities::{
    Category, CategoryDraft, CategoryId, CategoryRef, Page, PageRequest, SortDirection,
};
use crate::domain::ports::CategoryRepository;
use crate::entity::categories;
use crate::error::DomainError;

/// SeaORM implementation of CategoryRepository
pub struct SqlCategoryRepository {
    db: DatabaseConnection,
}

impl SqlCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SqlCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        let result = categories::Entity::find_by_id(id.0).one(&self.db).await?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Category>, DomainError> {
        let query = apply_sort(categories::Entity::find(), request)?;
        let paginator = query.paginate(&self.db, request.size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(request.page()).await?;

        Ok(Page::new(
            models.into_iter().map(|m| m.into()).collect(),
            request,
            total,
        ))
    }

    async fn save(&self, draft: &CategoryDraft) -> Result<Category, DomainError> {
        let now = Utc::now();

        let result = match draft.id {
            None => {
                categories::ActiveModel {
                    id: NotSet,
                    name: Set(draft.name.clone()),
                    created_at: Set(Some(now)),
                    updated_at: Set(None),
                }
                .insert(&self.db)
                .await?
            }
            Some(id) => categories::ActiveModel {
                id: Set(id.0),
                name: Set(draft.name.clone()),
                updated_at: Set(Some(now)),
                ..Default::default()
            }
            .update(&self.db)
            .await
            .map_err(|e| match DomainError::from(e) {
                DomainError::NotFound(_) => {
                    DomainError::NotFound(format!("Category {} not found", id))
                }
                other => other,
            })?,
        };

        Ok(result.into())
    }

    async fn delete_by_id(&self, id: CategoryId) -> Result<(), DomainError> {
        // Restricted while any product still links to the category.
        let result = categories::Entity::delete_by_id(id.0).exec(&self.db).await?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Category {} not found", id)))
        } else {
            Ok(())
        }
    }

    async fn get_reference(&self, id: CategoryId) -> Result<CategoryRef, DomainError> {
        let found: Option<i64> = categories::Entity::find_by_id(id.0)
            .select_only()
            .column(categories::Column::Id)
            .into_tuple()
            .one(&self.db)
            .await?;

        found
            .map(|id| CategoryRef::new(CategoryId(id)))
            .ok_or_else(|| DomainError::NotFound(format!("Category {} not found", id)))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(categories::Entity::find().count(&self.db).await?)
    }
}

fn apply_sort(
    query: Select<categories::Entity>,
    request: &PageRequest,
) -> Result<Select<categories::Entity>, DomainError> {
    let Some(sort) = request.sort() else {
        return Ok(query.order_by_asc(categories::Column::Id));
    };

    let column = match sort.property.as_str() {
        "id" => categories::Column::Id,
        "name" => categories::Column::Name,
        other => {
            return Err(DomainError::Validation(format!(
                "Cannot sort categories by '{}'",
                other
            )))
        }
    };

    let order = match sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    Ok(query
        .order_by(column, order)
        .order_by_asc(categories::Column::Id))
}

/// Convert SeaORM model to domain entity
impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: CategoryId(model.id),
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
