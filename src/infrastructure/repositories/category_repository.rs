use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::{Category, CategoryFilter, Principal};
use crate::error::AppResult;

use super::traits::CategoryRepository;

const CATEGORY_COLUMNS: &str = "id, name, description, slug, parent_id, is_subcategory, \
     is_active, created_by_id, created_by_name, created_by_email, created_at, updated_at";

pub struct CategoryRepositoryImpl {
    pool: PgPool,
}

impl CategoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    slug: String,
    parent_id: Option<Uuid>,
    is_subcategory: bool,
    is_active: bool,
    created_by_id: Uuid,
    created_by_name: String,
    created_by_email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            description: row.description,
            slug: row.slug,
            parent_id: row.parent_id,
            is_subcategory: row.is_subcategory,
            is_active: row.is_active,
            created_by: Principal {
                id: row.created_by_id,
                name: row.created_by_name,
                email: row.created_by_email,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn find_many(&self, filter: &CategoryFilter) -> AppResult<Vec<Category>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE 1 = 1"
        ));

        if let Some(search) = filter.search.as_deref() {
            let pattern = format!("%{search}%");
            query
                .push(" AND (name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(is_active) = filter.is_active {
            query.push(" AND is_active = ").push_bind(is_active);
        }
        if let Some(parent_id) = filter.parent_id {
            query.push(" AND parent_id = ").push_bind(parent_id);
        }
        if filter.only_subcategories {
            query.push(" AND is_subcategory = TRUE");
        }

        query.push(" ORDER BY created_at DESC");

        let rows = query
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Category::from))
    }

    async fn find_by_name_or_slug(&self, needle: &str) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE name = $1 OR slug = $1 LIMIT 1"
        ))
        .bind(needle)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Category::from))
    }

    async fn find_child_by_name(
        &self,
        parent_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE parent_id = $1 AND name = $2 LIMIT 1"
        ))
        .bind(parent_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Category::from))
    }

    async fn insert(&self, category: &Category) -> AppResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "INSERT INTO categories (id, name, description, slug, parent_id, is_subcategory, \
             is_active, created_by_id, created_by_name, created_by_email, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.slug)
        .bind(category.parent_id)
        .bind(category.is_subcategory)
        .bind(category.is_active)
        .bind(category.created_by.id)
        .bind(&category.created_by.name)
        .bind(&category.created_by.email)
        .bind(category.created_at)
        .bind(category.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(Category::from(row))
    }

    async fn update(&self, category: &Category) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "UPDATE categories SET name = $2, description = $3, slug = $4, parent_id = $5, \
             is_subcategory = $6, is_active = $7, updated_at = $8 \
             WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(&category.slug)
        .bind(category.parent_id)
        .bind(category.is_subcategory)
        .bind(category.is_active)
        .bind(category.updated_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Category::from))
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(&format!(
            "DELETE FROM categories WHERE id = $1 RETURNING {CATEGORY_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Category::from))
    }
}
