use serde::{Deserialize, Serialize};

/// Категории мебели в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Sofa,
    Bed,
}

impl ProductCategory {
    /// Получить код категории (сегмент URL и путь в удалённом API)
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Sofa => "sofa",
            ProductCategory::Bed => "bed",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Sofa => "Диваны",
            ProductCategory::Bed => "Кровати",
        }
    }

    /// Получить все категории
    pub fn all() -> Vec<ProductCategory> {
        vec![ProductCategory::Sofa, ProductCategory::Bed]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sofa" => Some(ProductCategory::Sofa),
            "bed" => Some(ProductCategory::Bed),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Фильтр по категории: `sofa`, `bed` или `all`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Sofa,
    Bed,
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Sofa => "sofa",
            CategoryFilter::Bed => "bed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Все товары",
            CategoryFilter::Sofa => "Диваны",
            CategoryFilter::Bed => "Кровати",
        }
    }

    pub fn all() -> Vec<CategoryFilter> {
        vec![CategoryFilter::All, CategoryFilter::Sofa, CategoryFilter::Bed]
    }

    /// Точное совпадение с кодом. Любое другое значение означает "все товары".
    pub fn from_code(code: &str) -> Self {
        match code {
            "sofa" => CategoryFilter::Sofa,
            "bed" => CategoryFilter::Bed,
            _ => CategoryFilter::All,
        }
    }

    /// Категории, которые нужно загрузить для этого фильтра
    pub fn categories(&self) -> Vec<ProductCategory> {
        match self {
            CategoryFilter::All => ProductCategory::all(),
            CategoryFilter::Sofa => vec![ProductCategory::Sofa],
            CategoryFilter::Bed => vec![ProductCategory::Bed],
        }
    }

    pub fn matches(&self, category: ProductCategory) -> bool {
        self.categories().contains(&category)
    }
}

impl From<ProductCategory> for CategoryFilter {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Sofa => CategoryFilter::Sofa,
            ProductCategory::Bed => CategoryFilter::Bed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_exact_match() {
        assert_eq!(CategoryFilter::from_code("sofa"), CategoryFilter::Sofa);
        assert_eq!(CategoryFilter::from_code("bed"), CategoryFilter::Bed);
        assert_eq!(CategoryFilter::from_code("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_code("Sofa"), CategoryFilter::All);
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(ProductCategory::Bed));
        assert!(CategoryFilter::Sofa.matches(ProductCategory::Sofa));
        assert!(!CategoryFilter::Sofa.matches(ProductCategory::Bed));
    }
}
