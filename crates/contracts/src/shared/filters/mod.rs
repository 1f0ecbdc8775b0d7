pub mod fabric;
pub mod product;

pub use fabric::{parse_abrasion, FabricFilterQuery, FabricFilters};
pub use product::{
    filter_by_category, filter_by_price_range, popular_products, price_range, sort_products,
    ProductFilterQuery, ProductFilters, DEFAULT_POPULAR_LIMIT,
};
