pub mod aggregate;

pub use aggregate::{
    fabric_item_id, find_category, FabricCatalogDocument, FabricCategory, FabricCollection,
    FabricVariant, LocalizedColor, TechnicalSpecifications,
};
