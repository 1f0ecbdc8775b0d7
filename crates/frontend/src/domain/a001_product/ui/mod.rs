pub mod card;
pub mod catalog;
pub mod details;
pub mod home;

pub use card::{ProductCard, ProductGrid};
pub use catalog::CatalogPage;
pub use details::ProductDetailsPage;
pub use home::HomePage;
