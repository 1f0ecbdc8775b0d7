pub mod aggregate;

pub use aggregate::{CartAction, CartItem, CartState, MIN_QUANTITY};
