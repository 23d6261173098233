use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Principal;

/// A node in the classification hierarchy. Roots ("main categories") have no
/// parent; subcategories nest to arbitrary depth.
///
/// `parent_id` and `is_subcategory` are both persisted for store and wire
/// compatibility. The validated creation path always derives the flag from
/// the parent, but read-side code must not assume the two agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub parent_id: Option<Uuid>,
    pub is_subcategory: bool,
    pub is_active: bool,
    pub created_by: Principal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Root detection for tree builds. Both denormalized fields are checked:
    /// a parentless record still flagged as a subcategory is treated as a
    /// broken branch, not a root.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none() && !self.is_subcategory
    }
}

/// One breadcrumb entry of a materialized category path. Serialized field
/// names (`_id`, `name`, `slug`, `level`) are frozen: existing product
/// records carry this exact shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPathEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub level: u32,
}

/// A category together with its resolved children. The children serialize
/// as `subcategory` to match existing consumers of the tree endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTreeNode {
    #[serde(flatten)]
    pub category: Category,
    #[serde(rename = "subcategory")]
    pub children: Vec<CategoryTreeNode>,
}

impl CategoryTreeNode {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            children: Vec::new(),
        }
    }
}

/// Filter applied when fetching categories for listings and tree builds.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    /// Case-insensitive substring match on name or description.
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub parent_id: Option<Uuid>,
    /// Restrict to records flagged as subcategories.
    pub only_subcategories: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal() -> Principal {
        Principal {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
        }
    }

    fn category(name: &str, parent_id: Option<Uuid>, is_subcategory: bool) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            slug: name.to_lowercase(),
            parent_id,
            is_subcategory,
            is_active: true,
            created_by: principal(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn parentless_unflagged_category_is_root() {
        assert!(category("Electronics", None, false).is_root());
    }

    #[test]
    fn category_with_parent_is_not_root() {
        let parent = Uuid::new_v4();
        assert!(!category("Mobiles", Some(parent), true).is_root());
    }

    #[test]
    fn parentless_category_flagged_subcategory_is_not_root() {
        // Denormalized fields disagree: the flag wins when the parent is
        // absent, so the record is excluded from the root set.
        assert!(!category("Broken", None, true).is_root());
    }

    #[test]
    fn path_entry_serializes_with_frozen_field_names() {
        let entry = CategoryPathEntry {
            id: Uuid::nil(),
            name: "Electronics".to_string(),
            slug: "electronics".to_string(),
            level: 0,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["_id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["name"], "Electronics");
        assert_eq!(json["slug"], "electronics");
        assert_eq!(json["level"], 0);
    }

    #[test]
    fn path_entry_roundtrips_through_json() {
        let entry = CategoryPathEntry {
            id: Uuid::new_v4(),
            name: "Mobiles".to_string(),
            slug: "mobiles".to_string(),
            level: 1,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let decoded: CategoryPathEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }

    #[test]
    fn tree_node_children_serialize_as_subcategory() {
        let root = category("Electronics", None, false);
        let child = category("Mobiles", Some(root.id), true);

        let node = CategoryTreeNode {
            category: root,
            children: vec![CategoryTreeNode::new(child)],
        };

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["name"], "Electronics");
        assert_eq!(json["subcategory"][0]["name"], "Mobiles");
        assert!(json.get("children").is_none());
    }
}
