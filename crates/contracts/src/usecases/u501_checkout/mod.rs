pub mod form;
pub mod order;

pub use form::{CheckoutForm, FieldErrors, OrderForm};
pub use order::{OrderSummary, PromoCode, PromoError};
