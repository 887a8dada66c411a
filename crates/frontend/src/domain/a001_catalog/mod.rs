pub mod api;
pub mod context_resolver;
pub mod filter;
pub mod selection;
pub mod ui;
