use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CategoryPathEntry;

/// The classification a product carries: the root category, the most
/// specific leaf, the id chain between them, and the materialized
/// breadcrumb. The breadcrumb is a point-in-time projection of the category
/// store; it is only refreshed by an explicit recompute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategoryAssignment {
    pub category_id: Uuid,
    pub subcategory_id: Uuid,
    pub category_path: Vec<Uuid>,
    pub subcategory_path: Vec<CategoryPathEntry>,
}

/// Product projection owned by this service: identity plus the denormalized
/// category fields it maintains. Everything else about products lives with
/// their owning systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub category_id: Option<Uuid>,
    pub subcategory_id: Option<Uuid>,
    pub category_path: Vec<Uuid>,
    pub subcategory_path: Vec<CategoryPathEntry>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn apply_assignment(&mut self, assignment: &ProductCategoryAssignment) {
        self.category_id = Some(assignment.category_id);
        self.subcategory_id = Some(assignment.subcategory_id);
        self.category_path = assignment.category_path.clone();
        self.subcategory_path = assignment.subcategory_path.clone();
    }
}
