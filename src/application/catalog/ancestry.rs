use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::DomainError;
use crate::error::AppResult;
use crate::infrastructure::repositories::CategoryRepository;

/// Answers "does `node_id` sit under `ancestor_id`" by climbing parent
/// pointers through the store.
///
/// Reflexive: a category belongs under itself. A missing node resolves to
/// `false`, never an error; callers treat "cannot prove ancestry" and "not
/// found" identically. The climb only continues past a parent that is itself
/// flagged as a subcategory: once an unflagged (root-shaped) parent is
/// reached without a match, the answer is `false` even if the real chain
/// continues. That termination rule is load-bearing for existing data and
/// must not be "fixed" to look at `parent_id` instead.
///
/// The visited set bounds the walk: revisiting a node means the store holds
/// a parent cycle, which surfaces as `CorruptHierarchy` rather than an
/// unbounded loop.
pub async fn is_descendant_of(
    repo: &dyn CategoryRepository,
    ancestor_id: Uuid,
    node_id: Uuid,
) -> AppResult<bool> {
    if node_id == ancestor_id {
        return Ok(true);
    }

    let mut visited: HashSet<Uuid> = HashSet::new();
    let mut current = node_id;

    loop {
        if !visited.insert(current) {
            return Err(DomainError::CorruptHierarchy(format!(
                "parent chain of category {node_id} revisits {current}"
            ))
            .into());
        }

        let Some(node) = repo.find_by_id(current).await? else {
            return Ok(false);
        };
        let Some(parent_id) = node.parent_id else {
            return Ok(false);
        };
        if parent_id == ancestor_id {
            return Ok(true);
        }

        let Some(parent) = repo.find_by_id(parent_id).await? else {
            return Ok(false);
        };
        if !parent.is_subcategory {
            return Ok(false);
        }

        current = parent_id;
    }
}
