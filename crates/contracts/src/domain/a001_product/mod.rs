pub mod aggregate;

pub use aggregate::{
    cart_item_id, InstallmentPlan, Material, Mechanism, Price, PriceRange, Product, Size,
    SizeWithMechanism, SofaSizes,
};
