//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and record every call so tests can verify
//! which repository operations a service performed.

use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Category, CategoryDraft, CategoryId, CategoryRef, Page, PageRequest, Product, ProductDraft,
    ProductId, ProductRef, SortDirection,
};
use crate::domain::ports::{CategoryRepository, ProductRepository};
use crate::error::DomainError;

/// Slice an already ordered list the way a store would
fn paginate<T: Clone>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let content = items
        .into_iter()
        .skip(request.offset() as usize)
        .take(request.size() as usize)
        .collect();
    Page::new(content, request, total)
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

// ============================================================================
// In-Memory Product Repository
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ProductRepoCall {
    FindById(ProductId),
    FindAll(PageRequest),
    Save(ProductDraft),
    DeleteById(ProductId),
    GetReference(ProductId),
    Count,
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    /// Categories a saved draft may link to
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
    /// Products something else still points at
    dependent: Arc<RwLock<HashSet<ProductId>>>,
    last_id: Arc<RwLock<i64>>,
    calls: Arc<RwLock<Vec<ProductRepoCall>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        {
            let mut last_id = self.last_id.write().unwrap();
            *last_id = (*last_id).max(product.id.0);
            self.products.write().unwrap().insert(product.id, product);
        }
        self
    }

    /// Pre-populate with a product that cannot be deleted
    pub fn with_dependent_product(self, product: Product) -> Self {
        self.dependent.write().unwrap().insert(product.id);
        self.with_product(product)
    }

    /// Make a category linkable from saved drafts
    pub fn with_category(self, category: Category) -> Self {
        self.categories
            .write()
            .unwrap()
            .insert(category.id, category);
        self
    }

    pub fn calls(&self) -> Vec<ProductRepoCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn calls_matching(&self, predicate: impl Fn(&ProductRepoCall) -> bool) -> usize {
        self.calls.read().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: ProductRepoCall) {
        self.calls.write().unwrap().push(call);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        self.record(ProductRepoCall::FindById(id));
        Ok(self.products.read().unwrap().get(&id).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Product>, DomainError> {
        self.record(ProductRepoCall::FindAll(request.clone()));

        let mut items: Vec<Product> = self.products.read().unwrap().values().cloned().collect();
        if let Some(sort) = request.sort() {
            let compare: fn(&Product, &Product) -> Ordering = match sort.property.as_str() {
                "id" => |a, b| a.id.cmp(&b.id),
                "name" => |a, b| a.name.cmp(&b.name),
                "price" => |a, b| a.price.cmp(&b.price),
                "date" => |a, b| a.date.cmp(&b.date),
                other => {
                    return Err(DomainError::Validation(format!(
                        "Cannot sort products by '{}'",
                        other
                    )))
                }
            };
            items.sort_by(|a, b| directed(compare(a, b), sort.direction).then(a.id.cmp(&b.id)));
        }

        Ok(paginate(items, request))
    }

    async fn save(&self, draft: &ProductDraft) -> Result<Product, DomainError> {
        self.record(ProductRepoCall::Save(draft.clone()));

        let categories = {
            let known = self.categories.read().unwrap();
            draft
                .categories
                .iter()
                .map(|r| {
                    known.get(&r.id()).cloned().ok_or_else(|| {
                        DomainError::IntegrityViolation(format!("Unknown category {}", r.id()))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut products = self.products.write().unwrap();
        let id = match draft.id {
            Some(id) if products.contains_key(&id) => id,
            Some(id) => return Err(DomainError::NotFound(format!("Product {} not found", id))),
            None => {
                let mut last_id = self.last_id.write().unwrap();
                *last_id += 1;
                ProductId(*last_id)
            }
        };

        let product = Product {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            img_url: draft.img_url.clone(),
            date: draft.date,
            categories,
        };
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError> {
        self.record(ProductRepoCall::DeleteById(id));

        if self.dependent.read().unwrap().contains(&id) {
            return Err(DomainError::IntegrityViolation(format!(
                "Product {} is still referenced",
                id
            )));
        }
        match self.products.write().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(format!("Product {} not found", id))),
        }
    }

    async fn get_reference(&self, id: ProductId) -> Result<ProductRef, DomainError> {
        self.record(ProductRepoCall::GetReference(id));

        if self.products.read().unwrap().contains_key(&id) {
            Ok(ProductRef::new(id))
        } else {
            Err(DomainError::NotFound(format!("Product {} not found", id)))
        }
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.record(ProductRepoCall::Count);
        Ok(self.products.read().unwrap().len() as u64)
    }
}

// ============================================================================
// In-Memory Category Repository
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryRepoCall {
    FindById(CategoryId),
    FindAll(PageRequest),
    Save(CategoryDraft),
    DeleteById(CategoryId),
    GetReference(CategoryId),
    Count,
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
    /// Categories some product still links to
    referenced: Arc<RwLock<HashSet<CategoryId>>>,
    last_id: Arc<RwLock<i64>>,
    calls: Arc<RwLock<Vec<CategoryRepoCall>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a category for testing
    pub fn with_category(self, category: Category) -> Self {
        {
            let mut last_id = self.last_id.write().unwrap();
            *last_id = (*last_id).max(category.id.0);
            self.categories
                .write()
                .unwrap()
                .insert(category.id, category);
        }
        self
    }

    /// Mark a category as linked from a product
    pub fn with_referenced(self, id: CategoryId) -> Self {
        self.referenced.write().unwrap().insert(id);
        self
    }

    pub fn calls(&self) -> Vec<CategoryRepoCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn calls_matching(&self, predicate: impl Fn(&CategoryRepoCall) -> bool) -> usize {
        self.calls.read().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: CategoryRepoCall) {
        self.calls.write().unwrap().push(call);
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, DomainError> {
        self.record(CategoryRepoCall::FindById(id));
        Ok(self.categories.read().unwrap().get(&id).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> Result<Page<Category>, DomainError> {
        self.record(CategoryRepoCall::FindAll(request.clone()));

        let mut items: Vec<Category> = self.categories.read().unwrap().values().cloned().collect();
        if let Some(sort) = request.sort() {
            let compare: fn(&Category, &Category) -> Ordering = match sort.property.as_str() {
                "id" => |a, b| a.id.cmp(&b.id),
                "name" => |a, b| a.name.cmp(&b.name),
                other => {
                    return Err(DomainError::Validation(format!(
                        "Cannot sort categories by '{}'",
                        other
                    )))
                }
            };
            items.sort_by(|a, b| directed(compare(a, b), sort.direction).then(a.id.cmp(&b.id)));
        }

        Ok(paginate(items, request))
    }

    async fn save(&self, draft: &CategoryDraft) -> Result<Category, DomainError> {
        self.record(CategoryRepoCall::Save(draft.clone()));

        let mut categories = self.categories.write().unwrap();
        let category = match draft.id {
            Some(id) => {
                let existing = categories
                    .get(&id)
                    .ok_or_else(|| DomainError::NotFound(format!("Category {} not found", id)))?;
                Category {
                    id,
                    name: draft.name.clone(),
                    created_at: existing.created_at,
                    updated_at: Some(Utc::now()),
                }
            }
            None => {
                let mut last_id = self.last_id.write().unwrap();
                *last_id += 1;
                Category {
                    id: CategoryId(*last_id),
                    name: draft.name.clone(),
                    created_at: Some(Utc::now()),
                    updated_at: None,
                }
            }
        };

        categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete_by_id(&self, id: CategoryId) -> Result<(), DomainError> {
        self.record(CategoryRepoCall::DeleteById(id));

        if self.referenced.read().unwrap().contains(&id) {
            return Err(DomainError::IntegrityViolation(format!(
                "Category {} is still referenced",
                id
            )));
        }
        match self.categories.write().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(format!("Category {} not found", id))),
        }
    }

    async fn get_reference(&self, id: CategoryId) -> Result<CategoryRef, DomainError> {
        self.record(CategoryRepoCall::GetReference(id));

        if self.categories.read().unwrap().contains_key(&id) {
            Ok(CategoryRef::new(id))
        } else {
            Err(DomainError::NotFound(format!("Category {} not found", id)))
        }
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.record(CategoryRepoCall::Count);
        Ok(self.categories.read().unwrap().len() as u64)
    }
}
