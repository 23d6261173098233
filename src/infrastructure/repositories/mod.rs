mod category_repository;
mod product_repository;
mod traits;

pub use category_repository::CategoryRepositoryImpl;
pub use product_repository::ProductRepositoryImpl;
pub use traits::{CategoryRepository, ProductRepository};
