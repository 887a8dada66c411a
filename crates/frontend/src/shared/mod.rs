pub mod api_utils;
pub mod debounce;
pub mod error;
pub mod fetch;
pub mod i18n;
pub mod icons;
pub mod list_utils;
pub mod storage;
pub mod ticket;
