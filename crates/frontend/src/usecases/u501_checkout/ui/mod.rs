pub mod checkout;
pub mod success;

pub use checkout::CheckoutPage;
pub use success::SuccessPage;
