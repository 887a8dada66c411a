pub mod browser;
pub mod product_card;
