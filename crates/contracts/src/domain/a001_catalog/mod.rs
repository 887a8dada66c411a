pub mod aggregate;
pub mod dto;

pub use aggregate::{Category, CategoryId, Product, ProductId};
pub use dto::{CategoriesResponse, ProductsResponse};
