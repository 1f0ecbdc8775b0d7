//! Фасетные фильтры коллекций тканей.

use serde::{Deserialize, Serialize};

use crate::domain::a002_fabric::{FabricCategory, FabricCollection};

/// Фильтры коллекций внутри категории тканей.
///
/// Списки сравниваются по вхождению подстроки без учёта регистра;
/// пустой список не ограничивает выборку.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricFilters {
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub min_abrasion: Option<u64>,
    #[serde(default)]
    pub max_abrasion: Option<u64>,
    #[serde(default)]
    pub availability: Vec<String>,
}

impl FabricFilters {
    pub fn is_empty(&self) -> bool {
        *self == FabricFilters::default()
    }

    pub fn matches(&self, collection: &FabricCollection) -> bool {
        if !matches_any(&self.collections, &collection.name_ru) {
            return false;
        }
        if !matches_any(&self.types, &collection.kind) {
            return false;
        }
        if self.min_abrasion.is_some() || self.max_abrasion.is_some() {
            let abrasion = parse_abrasion(&collection.technical_specifications.abrasion_resistance);
            if self.min_abrasion.is_some_and(|min| abrasion < min) {
                return false;
            }
            if self.max_abrasion.is_some_and(|max| abrasion > max) {
                return false;
            }
        }
        matches_any(&self.availability, &collection.availability)
    }

    pub fn apply<'a>(&self, collections: &'a [FabricCollection]) -> Vec<&'a FabricCollection> {
        collections.iter().filter(|c| self.matches(c)).collect()
    }
}

fn matches_any(needles: &[String], haystack: &str) -> bool {
    if needles.is_empty() {
        return true;
    }
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| haystack.contains(&needle.to_lowercase()))
}

/// Числовое значение износостойкости из свободного текста.
///
/// Все нецифровые символы выбрасываются: `"50 000 циклов"` -> 50000.
/// Текст без цифр (или слишком длинное число) даёт 0.
pub fn parse_abrasion(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Параметры строки запроса `/api/check-fabric-filters`.
///
/// Списки передаются через запятую.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricFilterQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_abrasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_abrasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl FabricFilterQuery {
    pub fn new(category: &str, filters: &FabricFilters) -> Self {
        let join = |values: &[String]| {
            if values.is_empty() {
                None
            } else {
                Some(values.join(","))
            }
        };
        Self {
            category: Some(category.to_string()),
            collections: join(&filters.collections),
            types: join(&filters.types),
            min_abrasion: filters.min_abrasion.map(|v| v.to_string()),
            max_abrasion: filters.max_abrasion.map(|v| v.to_string()),
            availability: join(&filters.availability),
        }
    }

    pub fn filters(&self) -> FabricFilters {
        FabricFilters {
            collections: split_list(self.collections.as_deref()),
            types: split_list(self.types.as_deref()),
            min_abrasion: parse_bound(self.min_abrasion.as_deref()),
            max_abrasion: parse_bound(self.max_abrasion.as_deref()),
            availability: split_list(self.availability.as_deref()),
        }
    }
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

fn parse_bound(raw: Option<&str>) -> Option<u64> {
    super::product::parse_number(raw)
        .filter(|v| *v >= 0.0)
        .map(|v| v as u64)
}

/// Названия коллекций категории (для фасета "Коллекция")
pub fn collection_names(category: &FabricCategory) -> Vec<String> {
    category.collections.iter().map(|c| c.name_ru.clone()).collect()
}

/// Уникальные типы тканей в порядке первого появления
pub fn fabric_types(category: &FabricCategory) -> Vec<String> {
    unique_non_empty(category.collections.iter().map(|c| c.kind.as_str()))
}

/// Уникальные значения наличия в порядке первого появления
pub fn availabilities(category: &FabricCategory) -> Vec<String> {
    unique_non_empty(category.collections.iter().map(|c| c.availability.as_str()))
}

fn unique_non_empty<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !result.iter().any(|v| v == value) {
            result.push(value.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_fabric::aggregate::fixtures::velour;

    fn names(collections: &[&FabricCollection]) -> Vec<String> {
        collections.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_parse_abrasion() {
        assert_eq!(parse_abrasion("50 000 циклов"), 50000);
        assert_eq!(parse_abrasion("30000"), 30000);
        assert_eq!(parse_abrasion("нет данных"), 0);
        assert_eq!(parse_abrasion(""), 0);
        assert_eq!(parse_abrasion("99999999999999999999999"), 0);
    }

    #[test]
    fn test_substring_filters_are_case_insensitive() {
        let category = velour();
        let filters = FabricFilters {
            types: vec!["МИКРО".to_string()],
            ..Default::default()
        };
        assert_eq!(names(&filters.apply(&category.collections)), vec!["Bamboo"]);

        let filters = FabricFilters {
            collections: vec!["моно".to_string(), "софт".to_string()],
            availability: vec!["в наличии".to_string()],
            ..Default::default()
        };
        assert_eq!(
            names(&filters.apply(&category.collections)),
            vec!["Monolith", "Soft Line"]
        );
    }

    #[test]
    fn test_abrasion_bounds() {
        let category = velour();
        let filters = FabricFilters {
            min_abrasion: Some(40000),
            ..Default::default()
        };
        assert_eq!(names(&filters.apply(&category.collections)), vec!["Monolith"]);

        // Текст без цифр деградирует до 0
        let filters = FabricFilters {
            max_abrasion: Some(35000),
            ..Default::default()
        };
        assert_eq!(
            names(&filters.apply(&category.collections)),
            vec!["Bamboo", "Soft Line"]
        );
    }

    #[test]
    fn test_query_round_trip_through_comma_lists() {
        let filters = FabricFilters {
            collections: vec!["Монолит".to_string(), "Бамбук".to_string()],
            types: vec![],
            min_abrasion: Some(20000),
            max_abrasion: None,
            availability: vec!["Под заказ".to_string()],
        };
        let query = FabricFilterQuery::new("velour", &filters);
        assert_eq!(query.collections.as_deref(), Some("Монолит,Бамбук"));
        assert_eq!(query.types, None);
        assert_eq!(query.filters(), filters);

        let query = FabricFilterQuery {
            min_abrasion: Some("много".to_string()),
            types: Some(" ,велюр, ".to_string()),
            ..Default::default()
        };
        let parsed = query.filters();
        assert_eq!(parsed.min_abrasion, None);
        assert_eq!(parsed.types, vec!["велюр".to_string()]);
    }

    #[test]
    fn test_facets() {
        let category = velour();
        assert_eq!(collection_names(&category), vec!["Монолит", "Бамбук", "Софт Лайн"]);
        assert_eq!(fabric_types(&category), vec!["Велюр", "Микровелюр"]);
        assert_eq!(availabilities(&category), vec!["В наличии", "Под заказ"]);
    }
}
