pub mod api_utils;
pub mod catalog_api;
pub mod components;
pub mod price;
pub mod storage;
pub mod store_context;
