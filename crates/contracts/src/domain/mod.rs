pub mod a001_product;
pub mod a002_fabric;
pub mod a003_cart;
pub mod a004_fabric_cart;
pub mod a005_favorites;
pub mod a006_fabric_favorites;
pub mod a007_recently_viewed;
pub mod common;
