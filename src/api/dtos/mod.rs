pub mod category_dto;
pub mod common;
pub mod product_dto;

pub use category_dto::*;
pub use common::*;
pub use product_dto::*;
