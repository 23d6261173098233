use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::{CategoryPathEntry, Product, ProductCategoryAssignment};
use crate::error::AppResult;

use super::traits::ProductRepository;

const PRODUCT_COLUMNS: &str = "id, title, category_id, subcategory_id, category_path, \
     subcategory_path, is_active, created_at, updated_at";

pub struct ProductRepositoryImpl {
    pool: PgPool,
}

impl ProductRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    title: String,
    category_id: Option<Uuid>,
    subcategory_id: Option<Uuid>,
    category_path: Vec<Uuid>,
    #[sqlx(json)]
    subcategory_path: Vec<CategoryPathEntry>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            title: row.title,
            category_id: row.category_id,
            subcategory_id: row.subcategory_id,
            category_path: row.category_path,
            subcategory_path: row.subcategory_path,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Product::from))
    }

    async fn update_category_assignment(
        &self,
        id: Uuid,
        assignment: &ProductCategoryAssignment,
    ) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "UPDATE products SET category_id = $2, subcategory_id = $3, category_path = $4, \
             subcategory_path = $5, updated_at = now() \
             WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(assignment.category_id)
        .bind(assignment.subcategory_id)
        .bind(&assignment.category_path)
        .bind(sqlx::types::Json(&assignment.subcategory_path))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Product::from))
    }
}
