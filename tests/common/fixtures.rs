use catalog_backend::application::catalog::slugify;
use catalog_backend::domain::{Category, Principal, Product};
use chrono::Utc;
use uuid::Uuid;

pub fn principal() -> Principal {
    Principal {
        id: Uuid::new_v4(),
        name: "Store Admin".to_string(),
        email: "admin@example.com".to_string(),
    }
}

pub fn category(name: &str, parent_id: Option<Uuid>, is_subcategory: bool) -> Category {
    let now = Utc::now();
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        slug: slugify(name),
        parent_id,
        is_subcategory,
        is_active: true,
        created_by: principal(),
        created_at: now,
        updated_at: now,
    }
}

pub fn root_category(name: &str) -> Category {
    category(name, None, false)
}

pub fn subcategory(name: &str, parent_id: Uuid) -> Category {
    category(name, Some(parent_id), true)
}

pub fn product(title: &str) -> Product {
    let now = Utc::now();
    Product {
        id: Uuid::new_v4(),
        title: title.to_string(),
        category_id: None,
        subcategory_id: None,
        category_path: Vec::new(),
        subcategory_path: Vec::new(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
