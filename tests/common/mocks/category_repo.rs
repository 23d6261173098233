#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use catalog_backend::domain::{Category, CategoryFilter};
use catalog_backend::error::AppResult;
use catalog_backend::infrastructure::repositories::CategoryRepository;
use uuid::Uuid;

/// In-memory category store. Preserves insertion order, which stands in for
/// the repository's fetch ordering in tree tests.
#[derive(Default)]
pub struct MockCategoryRepo {
    pub categories: Mutex<Vec<Category>>,
}

impl MockCategoryRepo {
    pub fn with(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Category>> {
        self.categories.lock().expect("categories mutex poisoned")
    }
}

fn matches_filter(category: &Category, filter: &CategoryFilter) -> bool {
    if let Some(search) = filter.search.as_deref() {
        let needle = search.to_lowercase();
        let in_name = category.name.to_lowercase().contains(&needle);
        let in_description = category
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(&needle))
            .unwrap_or(false);
        if !in_name && !in_description {
            return false;
        }
    }
    if let Some(is_active) = filter.is_active {
        if category.is_active != is_active {
            return false;
        }
    }
    if let Some(parent_id) = filter.parent_id {
        if category.parent_id != Some(parent_id) {
            return false;
        }
    }
    if filter.only_subcategories && !category.is_subcategory {
        return false;
    }
    true
}

#[async_trait]
impl CategoryRepository for MockCategoryRepo {
    async fn find_many(&self, filter: &CategoryFilter) -> AppResult<Vec<Category>> {
        Ok(self
            .lock()
            .iter()
            .filter(|c| matches_filter(c, filter))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        Ok(self.lock().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_name_or_slug(&self, needle: &str) -> AppResult<Option<Category>> {
        Ok(self
            .lock()
            .iter()
            .find(|c| c.name == needle || c.slug == needle)
            .cloned())
    }

    async fn find_child_by_name(
        &self,
        parent_id: Uuid,
        name: &str,
    ) -> AppResult<Option<Category>> {
        Ok(self
            .lock()
            .iter()
            .find(|c| c.parent_id == Some(parent_id) && c.name == name)
            .cloned())
    }

    async fn insert(&self, category: &Category) -> AppResult<Category> {
        self.lock().push(category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> AppResult<Option<Category>> {
        let mut categories = self.lock();
        match categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => {
                *existing = category.clone();
                Ok(Some(category.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<Option<Category>> {
        let mut categories = self.lock();
        let position = categories.iter().position(|c| c.id == id);
        Ok(position.map(|index| categories.remove(index)))
    }
}
