pub mod aggregate;

pub use aggregate::{FabricFavoriteItem, FabricFavoritesAction, FabricFavoritesState};
