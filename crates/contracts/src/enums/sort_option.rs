use serde::{Deserialize, Serialize};

/// Варианты сортировки каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "popularity")]
    Popularity,
}

impl SortOption {
    /// Получить код сортировки (значение параметра `sort`)
    pub fn code(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::Popularity => "popularity",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Default => "По умолчанию",
            SortOption::PriceAsc => "Сначала дешевле",
            SortOption::PriceDesc => "Сначала дороже",
            SortOption::NameAsc => "По названию (А-Я)",
            SortOption::NameDesc => "По названию (Я-А)",
            SortOption::Popularity => "По популярности",
        }
    }

    pub fn all() -> Vec<SortOption> {
        vec![
            SortOption::Default,
            SortOption::PriceAsc,
            SortOption::PriceDesc,
            SortOption::NameAsc,
            SortOption::NameDesc,
            SortOption::Popularity,
        ]
    }

    /// Неизвестный код означает сортировку по умолчанию
    pub fn from_code(code: &str) -> Self {
        match code {
            "price-asc" => SortOption::PriceAsc,
            "price-desc" => SortOption::PriceDesc,
            "name-asc" => SortOption::NameAsc,
            "name-desc" => SortOption::NameDesc,
            "popularity" => SortOption::Popularity,
            _ => SortOption::Default,
        }
    }
}
