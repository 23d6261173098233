use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, CategoryFilter, Product, ProductCategoryAssignment};
use crate::error::AppResult;

/// The category store boundary. All hierarchy logic operates on data fetched
/// through this trait; serialization of concurrent creates happens behind it
/// (unique indexes), not inside the algorithms.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_many(&self, filter: &CategoryFilter) -> AppResult<Vec<Category>>;
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>>;
    /// Single-needle lookup matching either the display name or the slug.
    async fn find_by_name_or_slug(&self, needle: &str) -> AppResult<Option<Category>>;
    async fn find_child_by_name(&self, parent_id: Uuid, name: &str)
        -> AppResult<Option<Category>>;
    async fn insert(&self, category: &Category) -> AppResult<Category>;
    /// Returns `None` when the category no longer exists.
    async fn update(&self, category: &Category) -> AppResult<Option<Category>>;
    /// Returns the deleted record, or `None` when it was already gone.
    /// No cascade: children keep their dangling parent reference.
    async fn delete(&self, id: Uuid) -> AppResult<Option<Category>>;
}

/// The slice of the product store this service owns: the denormalized
/// category assignment fields.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;
    async fn update_category_assignment(
        &self,
        id: Uuid,
        assignment: &ProductCategoryAssignment,
    ) -> AppResult<Option<Product>>;
}
