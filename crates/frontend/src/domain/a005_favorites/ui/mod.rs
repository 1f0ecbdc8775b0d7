pub mod page;

pub use page::FavoritesPage;
