use std::sync::Arc;

use uuid::Uuid;

use crate::application::CategoryService;
use crate::domain::{DomainError, Product};
use crate::error::AppResult;
use crate::infrastructure::repositories::ProductRepository;

#[derive(Clone)]
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
    categories: Arc<CategoryService>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>, categories: Arc<CategoryService>) -> Self {
        Self {
            product_repo,
            categories,
        }
    }

    /// Validates the claimed category pair, materializes the breadcrumb and
    /// persists the denormalized assignment onto the product.
    pub async fn assign_category(
        &self,
        product_id: Uuid,
        category_id: Uuid,
        subcategory_id: Uuid,
        explicit_path: Option<Vec<Uuid>>,
    ) -> AppResult<Product> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("product not found".to_string()))?;

        let assignment = self
            .categories
            .assign_product_category(category_id, subcategory_id, explicit_path)
            .await?;

        self.product_repo
            .update_category_assignment(product_id, &assignment)
            .await?
            .ok_or_else(|| DomainError::NotFound("product not found".to_string()).into())
    }

    /// Re-materializes the cached breadcrumb from the live hierarchy. The
    /// walk ignores the stored id chain on purpose: a recompute should
    /// reflect renames and reparentings alike. This is the only way a stale
    /// path ever changes; nothing refreshes it implicitly.
    pub async fn recompute_path(&self, product_id: Uuid) -> AppResult<Product> {
        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("product not found".to_string()))?;

        let (Some(category_id), Some(subcategory_id)) =
            (product.category_id, product.subcategory_id)
        else {
            return Err(DomainError::Validation(
                "product has no category assignment to recompute".to_string(),
            )
            .into());
        };

        let assignment = self
            .categories
            .assign_product_category(category_id, subcategory_id, None)
            .await?;

        self.product_repo
            .update_category_assignment(product_id, &assignment)
            .await?
            .ok_or_else(|| DomainError::NotFound("product not found".to_string()).into())
    }
}
