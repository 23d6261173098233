use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{Category, CategoryPathEntry, DomainError};
use crate::error::AppResult;
use crate::infrastructure::repositories::CategoryRepository;

/// Materializes the root-to-leaf breadcrumb that gets denormalized onto a
/// product.
///
/// Two modes, tried in order:
///
/// 1. Explicit: the caller already knows the id chain (root-first). Each id
///    resolves to its current name and slug; ids that no longer resolve are
///    skipped, so the result may be shorter than the input. Levels number
///    the *result*, keeping them gapless.
/// 2. Walk: climb from the leaf toward the known root, then place the root
///    itself at the front. A broken link truncates the walk and the partial
///    breadcrumb is returned as-is; an incomplete path is always preferred
///    to failing the product write.
///
/// Levels are `0..n-1` root-first in both modes. Walk mode carries the same
/// visited-set cycle guard as the ancestor resolver.
pub async fn build_path(
    repo: &dyn CategoryRepository,
    leaf_id: Uuid,
    root_id: Uuid,
    explicit: Option<&[Uuid]>,
) -> AppResult<Vec<CategoryPathEntry>> {
    if let Some(ids) = explicit {
        let mut path = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(category) = repo.find_by_id(*id).await? {
                path.push(entry(&category, path.len() as u32));
            }
        }
        return Ok(path);
    }

    let mut climbed: Vec<Category> = Vec::new();
    let mut visited: HashSet<Uuid> = HashSet::new();
    let mut current = Some(leaf_id);

    while let Some(id) = current {
        if id == root_id {
            break;
        }
        if !visited.insert(id) {
            return Err(DomainError::CorruptHierarchy(format!(
                "parent chain of category {leaf_id} revisits {id}"
            ))
            .into());
        }
        let Some(category) = repo.find_by_id(id).await? else {
            break;
        };
        current = category.parent_id;
        climbed.push(category);
    }

    if let Some(root) = repo.find_by_id(root_id).await? {
        climbed.push(root);
    }

    climbed.reverse();
    Ok(climbed
        .iter()
        .enumerate()
        .map(|(level, category)| entry(category, level as u32))
        .collect())
}

fn entry(category: &Category, level: u32) -> CategoryPathEntry {
    CategoryPathEntry {
        id: category.id,
        name: category.name.clone(),
        slug: category.slug.clone(),
        level,
    }
}
