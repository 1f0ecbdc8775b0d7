pub mod aggregate;

pub use aggregate::{Favorite, FavoriteItem, FavoriteProduct, FavoritesAction, FavoritesState};
