pub mod checkout_delivery;
pub mod delivery_method;
pub mod payment_method;
pub mod product_category;
pub mod social_media;
pub mod sort_option;
