use uuid::Uuid;

use crate::domain::{Category, CategoryTreeNode};

/// Reconstructs the nested tree from a flat record set.
///
/// A recursive partition: at every level the full input slice is re-scanned
/// for records whose parent matches the target. Quadratic in the number of
/// categories, which is fine at catalog scale and keeps the pass simple.
///
/// With no target parent, roots are records with neither a parent reference
/// nor a subcategory flag; the fields are denormalized and may disagree, and
/// a parentless record flagged as subcategory must not surface as a root.
/// Records whose parent is absent from the input never appear at all, so a
/// filtered fetch cannot fabricate broken nodes. Sibling order follows input
/// order.
pub fn build_tree(categories: &[Category], parent_id: Option<Uuid>) -> Vec<CategoryTreeNode> {
    let mut tree = Vec::new();

    for category in categories {
        let selected = match parent_id {
            Some(target) => category.parent_id == Some(target),
            None => category.is_root(),
        };

        if selected {
            tree.push(CategoryTreeNode {
                category: category.clone(),
                children: build_tree(categories, Some(category.id)),
            });
        }
    }

    tree
}
