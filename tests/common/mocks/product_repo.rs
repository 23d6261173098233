#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use catalog_backend::domain::{Product, ProductCategoryAssignment};
use catalog_backend::error::AppResult;
use catalog_backend::infrastructure::repositories::ProductRepository;
use chrono::Utc;
use uuid::Uuid;

#[derive(Default)]
pub struct MockProductRepo {
    pub products: Mutex<Vec<Product>>,
}

impl MockProductRepo {
    pub fn with(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Product>> {
        self.products.lock().expect("products mutex poisoned")
    }
}

#[async_trait]
impl ProductRepository for MockProductRepo {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.lock().iter().find(|p| p.id == id).cloned())
    }

    async fn update_category_assignment(
        &self,
        id: Uuid,
        assignment: &ProductCategoryAssignment,
    ) -> AppResult<Option<Product>> {
        let mut products = self.lock();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply_assignment(assignment);
                product.updated_at = Utc::now();
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }
}
