use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Category, CategoryTreeNode, Principal};

use super::common::PaginationMeta;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Category name must be between 2 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(max = 500, message = "Category description cannot exceed 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubcategoryRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Subcategory name must be between 2 and 100 characters"
    ))]
    pub name: String,
    #[validate(length(
        max = 500,
        message = "Subcategory description cannot exceed 500 characters"
    ))]
    pub description: Option<String>,
    /// Any existing category, root or subcategory: nesting is unlimited.
    pub parent_category_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(
        min = 2,
        max = 100,
        message = "Category name must be between 2 and 100 characters"
    ))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "Category description cannot exceed 500 characters"))]
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct CategoryListQuery {
    #[serde(default = "super::common::default_list_page")]
    #[validate(range(min = 1))]
    pub page: usize,
    #[serde(default = "super::common::default_list_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: usize,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SubcategoryListQuery {
    pub search: Option<String>,
    pub parent_category_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedByResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<Principal> for CreatedByResponse {
    fn from(principal: Principal) -> Self {
        Self {
            id: principal.id,
            name: principal.name,
            email: principal.email,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub parent_id: Option<Uuid>,
    pub is_subcategory: bool,
    pub is_active: bool,
    pub created_by: CreatedByResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            slug: category.slug,
            parent_id: category.parent_id,
            is_subcategory: category.is_subcategory,
            is_active: category.is_active,
            created_by: category.created_by.into(),
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}

/// Tree projection: each node is a category plus its resolved children,
/// serialized under `subcategory` for existing consumers.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryTreeNodeResponse {
    #[serde(flatten)]
    pub category: CategoryResponse,
    #[serde(rename = "subcategory")]
    pub children: Vec<CategoryTreeNodeResponse>,
}

impl From<CategoryTreeNode> for CategoryTreeNodeResponse {
    fn from(node: CategoryTreeNode) -> Self {
        Self {
            category: node.category.into(),
            children: node.children.into_iter().map(Self::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryTreeResponse {
    pub categories: Vec<CategoryTreeNodeResponse>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedCategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for DeletedCategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}
