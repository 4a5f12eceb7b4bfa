//! SQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait,
    ModelTrait, NotSet, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
    TransactionTrait,
};

use crate::domain::entities::{
    Category, Page, PageRequest, Product, ProductDraft, ProductId, ProductRef, SortDirection,
};
use crate::domain::ports::ProductRepository;
use crate::entity::{categories, product_categories, products};
use crate::error::DomainError;

/// SeaORM implementation of ProductRepository
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let Some(model) = products::Entity::find_by_id(id.0).one(&self.db).await? else {
            return Ok(None);
        };

        let categories = load_categories(&self.db, &model).await?;
        Ok(Some(to_product(model, categories)))
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Product>, DomainError> {
        let query = apply_sort(products::Entity::find(), request)?;
        let paginator = query.paginate(&self.db, request.size());

        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(request.page()).await?;

        let categories = models
            .load_many_to_many(
                categories::Entity::find().order_by_asc(categories::Column::Id),
                product_categories::Entity,
                &self.db,
            )
            .await?;

        let content = models
            .into_iter()
            .zip(categories)
            .map(|(model, categories)| to_product(model, categories))
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn save(&self, draft: &ProductDraft) -> Result<Product, DomainError> {
        let txn = self.db.begin().await?;

        let model = match draft.id {
            None => active_model(draft, NotSet).insert(&txn).await?,
            Some(id) => {
                let model = active_model(draft, Set(id.0))
                    .update(&txn)
                    .await
                    .map_err(|e| match DomainError::from(e) {
                        DomainError::NotFound(_) => {
                            DomainError::NotFound(format!("Product {} not found", id))
                        }
                        other => other,
                    })?;

                product_categories::Entity::delete_many()
                    .filter(product_categories::Column::ProductId.eq(model.id))
                    .exec(&txn)
                    .await?;

                model
            }
        };

        if !draft.categories.is_empty() {
            let links = draft
                .categories
                .iter()
                .map(|category| product_categories::ActiveModel {
                    product_id: Set(model.id),
                    category_id: Set(category.id().0),
                });

            product_categories::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        let categories = load_categories(&txn, &model).await?;
        txn.commit().await?;

        Ok(to_product(model, categories))
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError> {
        // Category links cascade; order items restrict.
        let result = products::Entity::delete_by_id(id.0).exec(&self.db).await?;

        if result.rows_affected == 0 {
            Err(DomainError::NotFound(format!("Product {} not found", id)))
        } else {
            Ok(())
        }
    }

    async fn get_reference(&self, id: ProductId) -> Result<ProductRef, DomainError> {
        let found: Option<i64> = products::Entity::find_by_id(id.0)
            .select_only()
            .column(products::Column::Id)
            .into_tuple()
            .one(&self.db)
            .await?;

        found
            .map(|id| ProductRef::new(ProductId(id)))
            .ok_or_else(|| DomainError::NotFound(format!("Product {} not found", id)))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(products::Entity::find().count(&self.db).await?)
    }
}

fn apply_sort(
    query: Select<products::Entity>,
    request: &PageRequest,
) -> Result<Select<products::Entity>, DomainError> {
    let Some(sort) = request.sort() else {
        return Ok(query.order_by_asc(products::Column::Id));
    };

    let column = match sort.property.as_str() {
        "id" => products::Column::Id,
        "name" => products::Column::Name,
        "price" => products::Column::Price,
        "date" => products::Column::Date,
        other => {
            return Err(DomainError::Validation(format!(
                "Cannot sort products by '{}'",
                other
            )))
        }
    };

    let order = match sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    // Id as tie-breaker keeps page boundaries stable.
    Ok(query
        .order_by(column, order)
        .order_by_asc(products::Column::Id))
}

async fn load_categories<C>(
    db: &C,
    model: &products::Model,
) -> Result<Vec<categories::Model>, DomainError>
where
    C: ConnectionTrait,
{
    Ok(model
        .find_related(categories::Entity)
        .order_by_asc(categories::Column::Id)
        .all(db)
        .await?)
}

fn active_model(draft: &ProductDraft, id: sea_orm::ActiveValue<i64>) -> products::ActiveModel {
    products::ActiveModel {
        id,
        name: Set(draft.name.clone()),
        description: Set(draft.description.clone()),
        price: Set(draft.price),
        img_url: Set(draft.img_url.clone()),
        date: Set(draft.date),
    }
}

fn to_product(model: products::Model, categories: Vec<categories::Model>) -> Product {
    Product {
        id: ProductId(model.id),
        name: model.name,
        description: model.description,
        price: model.price,
        img_url: model.img_url,
        date: model.date,
        categories: categories.into_iter().map(Category::from).collect(),
    }
}
