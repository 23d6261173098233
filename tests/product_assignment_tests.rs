use std::sync::Arc;

mod common;

use crate::common::fixtures;
use crate::common::mocks::{MockCategoryRepo, MockProductRepo};
use actix_rt::test;
use catalog_backend::application::{CategoryService, ProductService, UpdateCategoryInput};
use catalog_backend::domain::Category;
use catalog_backend::error::AppError;
use catalog_backend::infrastructure::repositories::ProductRepository;
use uuid::Uuid;

struct Harness {
    product_repo: Arc<MockProductRepo>,
    categories: Arc<CategoryService>,
    products: ProductService,
}

fn harness(categories: Vec<Category>) -> Harness {
    let category_repo = Arc::new(MockCategoryRepo::with(categories));
    let product_repo = Arc::new(MockProductRepo::default());
    let category_service = Arc::new(CategoryService::new(category_repo));
    let product_service = ProductService::new(product_repo.clone(), category_service.clone());
    Harness {
        product_repo,
        categories: category_service,
        products: product_service,
    }
}

fn three_level_catalog() -> (Category, Category, Category) {
    let electronics = fixtures::root_category("Electronics");
    let mobiles = fixtures::subcategory("Mobiles", electronics.id);
    let smartphones = fixtures::subcategory("Smartphones", mobiles.id);
    (electronics, mobiles, smartphones)
}

#[test]
async fn assignment_across_three_levels_materializes_the_full_breadcrumb() {
    let (electronics, mobiles, smartphones) = three_level_catalog();
    let h = harness(vec![
        electronics.clone(),
        mobiles.clone(),
        smartphones.clone(),
    ]);

    let assignment = h
        .categories
        .assign_product_category(electronics.id, smartphones.id, None)
        .await
        .expect("assignment should succeed");

    assert_eq!(assignment.category_id, electronics.id);
    assert_eq!(assignment.subcategory_id, smartphones.id);

    let names: Vec<&str> = assignment
        .subcategory_path
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    let levels: Vec<u32> = assignment.subcategory_path.iter().map(|e| e.level).collect();
    assert_eq!(names, vec!["Electronics", "Mobiles", "Smartphones"]);
    assert_eq!(levels, vec![0, 1, 2]);

    // With no explicit path, the id chain is derived from the breadcrumb.
    assert_eq!(
        assignment.category_path,
        vec![electronics.id, mobiles.id, smartphones.id]
    );
}

#[test]
async fn assignment_honors_a_caller_supplied_explicit_path() {
    let (electronics, mobiles, smartphones) = three_level_catalog();
    let h = harness(vec![
        electronics.clone(),
        mobiles.clone(),
        smartphones.clone(),
    ]);
    let explicit = vec![electronics.id, mobiles.id, smartphones.id];

    let assignment = h
        .categories
        .assign_product_category(electronics.id, smartphones.id, Some(explicit.clone()))
        .await
        .expect("assignment should succeed");

    assert_eq!(assignment.category_path, explicit);
    assert_eq!(assignment.subcategory_path.len(), 3);
}

#[test]
async fn assignment_rejects_subcategory_from_another_branch() {
    let (electronics, mobiles, smartphones) = three_level_catalog();
    let appliances = fixtures::root_category("Appliances");
    let fridges = fixtures::subcategory("Fridges", appliances.id);
    let h = harness(vec![
        electronics.clone(),
        mobiles,
        smartphones,
        appliances,
        fridges.clone(),
    ]);

    let result = h
        .categories
        .assign_product_category(electronics.id, fridges.id, None)
        .await;

    assert!(matches!(result, Err(AppError::InvalidRelationship(_))));
}

#[test]
async fn assignment_rejects_inactive_category() {
    let (mut electronics, mobiles, smartphones) = three_level_catalog();
    electronics.is_active = false;
    let h = harness(vec![electronics.clone(), mobiles, smartphones.clone()]);

    let result = h
        .categories
        .assign_product_category(electronics.id, smartphones.id, None)
        .await;

    assert!(matches!(result, Err(AppError::InactiveCategory(_))));
}

#[test]
async fn assignment_rejects_inactive_subcategory() {
    let (electronics, mobiles, mut smartphones) = three_level_catalog();
    smartphones.is_active = false;
    let h = harness(vec![electronics.clone(), mobiles, smartphones.clone()]);

    let result = h
        .categories
        .assign_product_category(electronics.id, smartphones.id, None)
        .await;

    assert!(matches!(result, Err(AppError::InactiveCategory(_))));
}

#[test]
async fn assignment_rejects_leaf_not_flagged_as_subcategory() {
    let electronics = fixtures::root_category("Electronics");
    let appliances = fixtures::root_category("Appliances");
    let h = harness(vec![electronics.clone(), appliances.clone()]);

    let result = h
        .categories
        .assign_product_category(electronics.id, appliances.id, None)
        .await;

    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn assignment_rejects_missing_category_or_subcategory() {
    let (electronics, mobiles, smartphones) = three_level_catalog();
    let h = harness(vec![electronics.clone(), mobiles, smartphones.clone()]);

    let missing_category = h
        .categories
        .assign_product_category(Uuid::new_v4(), smartphones.id, None)
        .await;
    assert!(matches!(missing_category, Err(AppError::NotFound(_))));

    let missing_subcategory = h
        .categories
        .assign_product_category(electronics.id, Uuid::new_v4(), None)
        .await;
    assert!(matches!(missing_subcategory, Err(AppError::NotFound(_))));
}

#[test]
async fn assigning_to_a_product_persists_the_denormalized_fields() {
    let (electronics, mobiles, smartphones) = three_level_catalog();
    let h = harness(vec![
        electronics.clone(),
        mobiles.clone(),
        smartphones.clone(),
    ]);
    let product = fixtures::product("Handset");
    h.product_repo.products.lock().unwrap().push(product.clone());

    let updated = h
        .products
        .assign_category(product.id, electronics.id, smartphones.id, None)
        .await
        .expect("assignment should persist");

    assert_eq!(updated.category_id, Some(electronics.id));
    assert_eq!(updated.subcategory_id, Some(smartphones.id));
    assert_eq!(updated.subcategory_path.len(), 3);
    assert_eq!(
        updated.category_path,
        vec![electronics.id, mobiles.id, smartphones.id]
    );
}

#[test]
async fn assigning_to_a_missing_product_is_not_found() {
    let (electronics, mobiles, smartphones) = three_level_catalog();
    let h = harness(vec![electronics.clone(), mobiles, smartphones.clone()]);

    let result = h
        .products
        .assign_category(Uuid::new_v4(), electronics.id, smartphones.id, None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[test]
async fn breadcrumb_stays_stale_until_explicitly_recomputed() {
    let (electronics, mobiles, smartphones) = three_level_catalog();
    let h = harness(vec![
        electronics.clone(),
        mobiles.clone(),
        smartphones.clone(),
    ]);
    let product = fixtures::product("Handset");
    h.product_repo.products.lock().unwrap().push(product.clone());

    h.products
        .assign_category(product.id, electronics.id, smartphones.id, None)
        .await
        .expect("assignment should persist");

    // Rename the middle category after assignment.
    h.categories
        .update(
            mobiles.id,
            UpdateCategoryInput {
                name: Some("Cell Phones".to_string()),
                ..UpdateCategoryInput::default()
            },
        )
        .await
        .expect("rename should succeed");

    // The cached breadcrumb still carries the old name.
    let stale = h
        .product_repo
        .find_by_id(product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stale.subcategory_path[1].name, "Mobiles");

    // The explicit recompute refreshes name, slug and ids from the live
    // hierarchy.
    let refreshed = h
        .products
        .recompute_path(product.id)
        .await
        .expect("recompute should succeed");
    assert_eq!(refreshed.subcategory_path[1].name, "Cell Phones");
    assert_eq!(refreshed.subcategory_path[1].slug, "cell-phones");
    assert_eq!(
        refreshed.category_path,
        vec![electronics.id, mobiles.id, smartphones.id]
    );
}

#[test]
async fn recompute_without_an_assignment_is_a_validation_error() {
    let h = harness(Vec::new());
    let product = fixtures::product("Unassigned");
    h.product_repo.products.lock().unwrap().push(product.clone());

    let result = h.products.recompute_path(product.id).await;

    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn recompute_for_a_missing_product_is_not_found() {
    let h = harness(Vec::new());

    let result = h.products.recompute_path(Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
