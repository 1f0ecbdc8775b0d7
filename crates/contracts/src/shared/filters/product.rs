//! Фильтрация и сортировка товаров, уже загруженных в память.

use serde::{Deserialize, Serialize};

use crate::domain::a001_product::{PriceRange, Product};
use crate::enums::product_category::CategoryFilter;
use crate::enums::sort_option::SortOption;

/// Порог популярности для блока "Популярные товары"
pub const POPULARITY_THRESHOLD: f64 = 4.5;

pub const DEFAULT_POPULAR_LIMIT: usize = 8;

/// Фильтры каталога мебели
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl ProductFilters {
    /// Применить фильтры к товарам.
    ///
    /// Ценовой фильтр включается только когда заданы обе границы.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let products = filter_by_category(products, self.category);
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => filter_by_price_range(products, min, max),
            _ => products,
        }
    }
}

/// Параметры строки запроса `/api/check-product-filters`.
///
/// Числа приходят строками; нечисловое значение считается незаданным.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilterQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<String>,
}

impl ProductFilterQuery {
    pub fn into_filters(self) -> ProductFilters {
        ProductFilters {
            category: self
                .category
                .as_deref()
                .map(CategoryFilter::from_code)
                .unwrap_or_default(),
            min_price: parse_number(self.min_price.as_deref()),
            max_price: parse_number(self.max_price.as_deref()),
        }
    }
}

impl From<&ProductFilters> for ProductFilterQuery {
    fn from(filters: &ProductFilters) -> Self {
        Self {
            category: Some(filters.category.code().to_string()),
            min_price: filters.min_price.map(|v| v.to_string()),
            max_price: filters.max_price.map(|v| v.to_string()),
        }
    }
}

pub(crate) fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub fn filter_by_category(products: Vec<Product>, category: CategoryFilter) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| category.matches(p.category()))
        .collect()
}

/// Включительный фильтр по `price.current`
pub fn filter_by_price_range(products: Vec<Product>, min_price: f64, max_price: f64) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.price.current >= min_price && p.price.current <= max_price)
        .collect()
}

/// Отсортировать товары. Равные по ключу сохраняют исходный порядок.
pub fn sort_products(products: &mut [Product], sort: SortOption) {
    match sort {
        SortOption::Default => {}
        SortOption::PriceAsc => {
            products.sort_by(|a, b| a.price.current.total_cmp(&b.price.current))
        }
        SortOption::PriceDesc => {
            products.sort_by(|a, b| b.price.current.total_cmp(&a.price.current))
        }
        SortOption::NameAsc => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortOption::NameDesc => {
            products.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
        }
        SortOption::Popularity => {
            products.sort_by(|a, b| b.popularity.total_cmp(&a.popularity))
        }
    }
}

/// Товары с популярностью выше порога, самые популярные первыми
pub fn popular_products(products: Vec<Product>, limit: usize) -> Vec<Product> {
    let mut popular: Vec<Product> = products
        .into_iter()
        .filter(|p| p.popularity > POPULARITY_THRESHOLD)
        .collect();
    sort_products(&mut popular, SortOption::Popularity);
    popular.truncate(limit);
    popular
}

/// Минимальная и максимальная цена. Для пустого списка - диапазон по умолчанию.
pub fn price_range(products: &[Product]) -> PriceRange {
    let mut prices = products.iter().map(|p| p.price.current);
    let Some(first) = prices.next() else {
        return PriceRange::default();
    };
    let (min, max) = prices.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
    PriceRange { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::fixtures::{bed, sofa};

    fn catalog() -> Vec<Product> {
        vec![
            sofa("1", "Честер", 4500.0, 4.9),
            sofa("2", "Амстердам", 999.0, 4.2),
            bed("3", "Барселона", 1000.0, 4.6),
            bed("4", "Лофт", 5000.0, 3.9),
            sofa("5", "бостон", 5001.0, 4.7),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let filtered = filter_by_price_range(catalog(), 1000.0, 5000.0);
        assert_eq!(ids(&filtered), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_filters_need_both_bounds() {
        let filters = ProductFilters {
            category: CategoryFilter::Sofa,
            min_price: Some(1000.0),
            max_price: None,
        };
        assert_eq!(ids(&filters.apply(catalog())), vec!["1", "2", "5"]);

        let filters = ProductFilters {
            max_price: Some(5000.0),
            ..filters
        };
        assert_eq!(ids(&filters.apply(catalog())), vec!["1"]);
    }

    #[test]
    fn test_query_parsing_is_lenient() {
        let query = ProductFilterQuery {
            category: Some("bed".to_string()),
            min_price: Some("abc".to_string()),
            max_price: Some(" 7000 ".to_string()),
        };
        let filters = query.into_filters();
        assert_eq!(filters.category, CategoryFilter::Bed);
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price, Some(7000.0));

        assert_eq!(ProductFilterQuery::default().into_filters(), ProductFilters::default());
    }

    #[test]
    fn test_sort_products() {
        let mut products = catalog();
        sort_products(&mut products, SortOption::PriceAsc);
        assert_eq!(ids(&products), vec!["2", "3", "1", "4", "5"]);

        sort_products(&mut products, SortOption::PriceDesc);
        assert_eq!(ids(&products), vec!["5", "4", "1", "3", "2"]);

        sort_products(&mut products, SortOption::NameAsc);
        assert_eq!(ids(&products), vec!["2", "3", "5", "4", "1"]);

        sort_products(&mut products, SortOption::NameDesc);
        assert_eq!(ids(&products), vec!["1", "4", "5", "3", "2"]);

        sort_products(&mut products, SortOption::Popularity);
        assert_eq!(ids(&products), vec!["1", "5", "3", "2", "4"]);
    }

    #[test]
    fn test_popular_products() {
        let popular = popular_products(catalog(), 2);
        assert_eq!(ids(&popular), vec!["1", "5"]);
        assert_eq!(popular_products(catalog(), DEFAULT_POPULAR_LIMIT).len(), 3);
    }

    #[test]
    fn test_price_range() {
        assert_eq!(
            price_range(&catalog()),
            PriceRange {
                min: 999.0,
                max: 5001.0
            }
        );
        assert_eq!(price_range(&[]), PriceRange::default());
    }
}
