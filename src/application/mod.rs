pub mod catalog;
mod category_service;
mod product_service;

pub use category_service::{
    CategoryService, CategoryTreePage, CreateCategoryInput, UpdateCategoryInput,
};
pub use product_service::ProductService;
