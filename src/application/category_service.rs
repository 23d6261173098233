use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::application::catalog::{build_path, build_tree, is_descendant_of, slugify};
use crate::domain::{
    Category, CategoryFilter, CategoryTreeNode, DomainError, Principal, ProductCategoryAssignment,
};
use crate::error::AppResult;
use crate::infrastructure::repositories::CategoryRepository;

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// One page of the category tree listing. The tree is built from the full
/// filtered set; pagination applies to root nodes only, so a page never
/// splits a subtree.
#[derive(Debug, Clone)]
pub struct CategoryTreePage {
    pub tree: Vec<CategoryTreeNode>,
    pub total_roots: usize,
}

#[derive(Clone)]
pub struct CategoryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// Creates a root category or, when `parent_id` is given, a subcategory
    /// at any depth. The subcategory flag is always derived from the parent
    /// here, so the two denormalized fields cannot disagree through this
    /// path. The duplicate-name lookup is a fast path for a friendly
    /// message; the store's unique indexes are the actual guard.
    pub async fn create(
        &self,
        principal: &Principal,
        input: CreateCategoryInput,
    ) -> AppResult<Category> {
        let name = input.name.trim().to_string();
        validate_name(&name)?;
        let description = normalize_description(input.description)?;

        let parent = match input.parent_id {
            Some(parent_id) => Some(
                self.category_repo
                    .find_by_id(parent_id)
                    .await?
                    .ok_or_else(|| {
                        DomainError::NotFound("parent category not found".to_string())
                    })?,
            ),
            None => None,
        };

        match &parent {
            Some(parent) => {
                if self
                    .category_repo
                    .find_child_by_name(parent.id, &name)
                    .await?
                    .is_some()
                {
                    return Err(DomainError::Conflict(
                        "subcategory with this name already exists under the parent category"
                            .to_string(),
                    )
                    .into());
                }
            }
            None => {
                if self
                    .category_repo
                    .find_by_name_or_slug(&name)
                    .await?
                    .is_some()
                {
                    return Err(DomainError::Conflict(
                        "category with this name already exists".to_string(),
                    )
                    .into());
                }
            }
        }

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            description,
            parent_id: parent.as_ref().map(|p| p.id),
            is_subcategory: parent.is_some(),
            is_active: true,
            created_by: principal.clone(),
            created_at: now,
            updated_at: now,
        };

        self.category_repo.insert(&category).await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("category not found".to_string()).into())
    }

    /// Applies a partial update. Renames recompute the slug; the parent link
    /// is not editable here (reparenting is a separate concern the admin API
    /// does not expose).
    pub async fn update(&self, id: Uuid, input: UpdateCategoryInput) -> AppResult<Category> {
        if input.name.is_none() && input.description.is_none() && input.is_active.is_none() {
            return Err(
                DomainError::Validation("provide at least one field to update".to_string()).into(),
            );
        }

        let mut category = self.get(id).await?;

        if let Some(name) = input.name {
            let name = name.trim().to_string();
            validate_name(&name)?;
            if name != category.name {
                if let Some(existing) = self.category_repo.find_by_name_or_slug(&name).await? {
                    if existing.id != id {
                        return Err(DomainError::Conflict(
                            "category with this name already exists".to_string(),
                        )
                        .into());
                    }
                }
                category.slug = slugify(&name);
                category.name = name;
            }
        }
        if let Some(description) = input.description {
            category.description = normalize_description(Some(description))?;
        }
        if let Some(is_active) = input.is_active {
            category.is_active = is_active;
        }
        category.updated_at = Utc::now();

        self.category_repo
            .update(&category)
            .await?
            .ok_or_else(|| DomainError::NotFound("category not found".to_string()).into())
    }

    /// Deletes without cascading: children keep their parent reference and
    /// surface as orphans in later tree builds.
    pub async fn delete(&self, id: Uuid) -> AppResult<Category> {
        self.category_repo
            .delete(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("category not found".to_string()).into())
    }

    /// Fetches everything matching the filter and rebuilds the hierarchy.
    /// Orphans (parent filtered out or deleted) are silently dropped by the
    /// tree builder; a listing must not fail because one record is broken.
    pub async fn list_tree(
        &self,
        search: Option<String>,
        is_active: Option<bool>,
        page: usize,
        per_page: usize,
    ) -> AppResult<CategoryTreePage> {
        let filter = CategoryFilter {
            search,
            is_active,
            ..CategoryFilter::default()
        };
        let categories = self.category_repo.find_many(&filter).await?;

        let roots = build_tree(&categories, None);
        let total_roots = roots.len();

        let page = page.max(1);
        let tree = roots
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(CategoryTreePage { tree, total_roots })
    }

    pub async fn list_subcategories(
        &self,
        search: Option<String>,
        parent_id: Option<Uuid>,
        is_active: Option<bool>,
    ) -> AppResult<Vec<Category>> {
        let filter = CategoryFilter {
            search,
            is_active,
            parent_id,
            only_subcategories: true,
        };
        self.category_repo.find_many(&filter).await
    }

    /// Validates a (category, subcategory) claim and materializes the
    /// assignment a product will carry. Strict on every write-side rule:
    /// both ends must exist and be active, the leaf must be a flagged
    /// subcategory with a parent, and the leaf must actually descend from
    /// the claimed root.
    pub async fn assign_product_category(
        &self,
        category_id: Uuid,
        subcategory_id: Uuid,
        explicit_path: Option<Vec<Uuid>>,
    ) -> AppResult<ProductCategoryAssignment> {
        let repo = self.category_repo.as_ref();

        let category = repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("category not found".to_string()))?;
        if !category.is_active {
            return Err(DomainError::InactiveCategory(
                "cannot assign inactive category to product".to_string(),
            )
            .into());
        }

        let subcategory = repo
            .find_by_id(subcategory_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("subcategory not found".to_string()))?;
        if !subcategory.is_active {
            return Err(DomainError::InactiveCategory(
                "cannot assign inactive subcategory to product".to_string(),
            )
            .into());
        }
        if !subcategory.is_subcategory {
            return Err(DomainError::Validation(
                "the provided id is not a subcategory".to_string(),
            )
            .into());
        }
        if subcategory.parent_id.is_none() {
            return Err(DomainError::Validation(
                "subcategory must have a parent category".to_string(),
            )
            .into());
        }

        if !is_descendant_of(repo, category_id, subcategory_id).await? {
            return Err(DomainError::InvalidRelationship(
                "subcategory does not belong to the specified category".to_string(),
            )
            .into());
        }

        let subcategory_path = build_path(
            repo,
            subcategory_id,
            category_id,
            explicit_path.as_deref(),
        )
        .await?;

        let category_path = explicit_path
            .unwrap_or_else(|| subcategory_path.iter().map(|entry| entry.id).collect());

        Ok(ProductCategoryAssignment {
            category_id,
            subcategory_id,
            category_path,
            subcategory_path,
        })
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let chars = name.chars().count();
    if chars < NAME_MIN_CHARS || chars > NAME_MAX_CHARS {
        return Err(DomainError::Validation(format!(
            "category name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn normalize_description(description: Option<String>) -> Result<Option<String>, DomainError> {
    let Some(description) = description else {
        return Ok(None);
    };
    let description = description.trim().to_string();
    if description.is_empty() {
        return Ok(None);
    }
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(DomainError::Validation(format!(
            "category description cannot exceed {DESCRIPTION_MAX_CHARS} characters"
        )));
    }
    Ok(Some(description))
}
