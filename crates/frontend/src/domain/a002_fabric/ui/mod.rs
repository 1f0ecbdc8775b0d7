pub mod categories;
pub mod category;
pub mod collection;

pub use categories::FabricCategoriesPage;
pub use category::FabricCategoryPage;
pub use collection::FabricCollectionPage;

/// Ссылка на страницу категории тканей
pub fn category_href(category_name: &str) -> String {
    format!("/fabrics/{}", crate::shared::api_utils::path_segment(category_name))
}

/// Ссылка на страницу коллекции
pub fn collection_href(category_name: &str, collection_name: &str) -> String {
    format!(
        "{}/{}",
        category_href(category_name),
        crate::shared::api_utils::path_segment(collection_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_href_encodes_spaces() {
        assert_eq!(category_href("velour"), "/fabrics/velour");
        assert_eq!(
            collection_href("velour", "Soft Line"),
            "/fabrics/velour/Soft%20Line"
        );
    }
}
