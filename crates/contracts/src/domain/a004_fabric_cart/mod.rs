pub mod aggregate;

pub use aggregate::{FabricCartAction, FabricCartItem, FabricCartState};
