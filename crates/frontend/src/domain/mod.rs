pub mod a001_product;
pub mod a002_fabric;
pub mod a003_cart;
pub mod a005_favorites;
pub mod a007_recently_viewed;
