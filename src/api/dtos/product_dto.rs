use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{CategoryPathEntry, Product};

/// Assignment request. Field names are frozen wire contract: existing
/// clients send `categoryId`/`subcategoryId` and, for deep hierarchies,
/// the full root-first `categoryPath`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignProductCategoryRequest {
    pub category_id: Uuid,
    pub subcategory_id: Uuid,
    #[serde(default)]
    pub category_path: Option<Vec<Uuid>>,
}

/// One breadcrumb entry as stored on product records (`_id`, not `id`).
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryPathEntryResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub level: u32,
}

impl From<CategoryPathEntry> for CategoryPathEntryResponse {
    fn from(entry: CategoryPathEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            slug: entry.slug,
            level: entry.level,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategoryResponse {
    pub id: Uuid,
    pub title: String,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub category_path: Vec<Uuid>,
    pub subcategory_path: Vec<CategoryPathEntryResponse>,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductCategoryResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            category_id: product.category_id,
            subcategory_id: product.subcategory_id,
            category_path: product.category_path,
            subcategory_path: product
                .subcategory_path
                .into_iter()
                .map(CategoryPathEntryResponse::from)
                .collect(),
            is_active: product.is_active,
            updated_at: product.updated_at,
        }
    }
}
