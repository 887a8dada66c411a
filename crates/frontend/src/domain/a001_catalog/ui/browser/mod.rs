pub mod panel;
pub mod view;
pub mod view_model;

pub use view::CatalogBrowser;
