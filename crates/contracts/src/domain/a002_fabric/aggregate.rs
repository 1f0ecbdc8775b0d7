use serde::{Deserialize, Serialize};

/// Название цвета на двух языках
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedColor {
    pub en: String,
    pub ru: String,
}

/// Цветовой вариант ткани (образец)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FabricVariant {
    pub id: u32,
    pub color: LocalizedColor,
    pub image: String,
}

/// Технические характеристики коллекции.
///
/// Значения приходят свободным текстом ("50 000 циклов Мартиндейла"),
/// числовые фильтры разбирают их сами.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSpecifications {
    #[serde(default)]
    pub fabric_type: String,
    #[serde(default)]
    pub abrasion_resistance: String,
    #[serde(default)]
    pub density: String,
    #[serde(default)]
    pub composition: String,
    #[serde(default, rename = "composition_ru")]
    pub composition_ru: String,
    #[serde(default)]
    pub width: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default, rename = "origin_ru")]
    pub origin_ru: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directionality: Option<String>,
    #[serde(default, rename = "directionality_ru", skip_serializing_if = "Option::is_none")]
    pub directionality_ru: Option<String>,
    #[serde(default, rename = "applicationAreas_ru", skip_serializing_if = "Option::is_none")]
    pub application_areas_ru: Option<Vec<String>>,
}

/// Коллекция тканей внутри категории
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FabricCollection {
    pub name: String,
    pub name_ru: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(rename = "technicalSpecifications", default)]
    pub technical_specifications: TechnicalSpecifications,
    #[serde(rename = "careInstructions_ru", default)]
    pub care_instructions_ru: Vec<String>,
    #[serde(default)]
    pub variants: Vec<FabricVariant>,
}

impl FabricCollection {
    pub fn variant(&self, variant_id: u32) -> Option<&FabricVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }

    /// Совпадение по английскому или русскому имени без учёта регистра
    pub fn matches_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.name.to_lowercase() == name || self.name_ru.to_lowercase() == name
    }
}

/// Категория тканей (например, "velour")
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FabricCategory {
    pub name: String,
    pub name_ru: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_ru: Option<String>,
    #[serde(default)]
    pub collections: Vec<FabricCollection>,
}

impl FabricCategory {
    /// Найти коллекцию по имени из URL (имя может быть url-encoded)
    pub fn find_collection(&self, collection_name: &str) -> Option<&FabricCollection> {
        let decoded = urlencoding::decode(collection_name)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| collection_name.to_string());
        self.collections.iter().find(|c| c.matches_name(&decoded))
    }
}

/// Корневой документ удалённого API тканей (`/craft`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FabricCatalogDocument {
    #[serde(default)]
    pub categories: Vec<FabricCategory>,
}

/// Найти категорию по имени без учёта регистра
pub fn find_category<'a>(
    categories: &'a [FabricCategory],
    category_name: &str,
) -> Option<&'a FabricCategory> {
    let name = category_name.to_lowercase();
    categories.iter().find(|c| c.name.to_lowercase() == name)
}

/// Составной ключ образца ткани: категория + коллекция + вариант
pub fn fabric_item_id(category_name: &str, collection_name: &str, variant_id: u32) -> String {
    format!("{}-{}-{}", category_name, collection_name, variant_id)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn variant(id: u32, color_ru: &str) -> FabricVariant {
        FabricVariant {
            id,
            color: LocalizedColor {
                en: format!("color-{}", id),
                ru: color_ru.to_string(),
            },
            image: format!("/fabrics/{}.jpg", id),
        }
    }

    pub fn collection(
        name: &str,
        name_ru: &str,
        kind: &str,
        availability: &str,
        abrasion: &str,
    ) -> FabricCollection {
        FabricCollection {
            name: name.to_string(),
            name_ru: name_ru.to_string(),
            kind: kind.to_string(),
            availability: availability.to_string(),
            technical_specifications: TechnicalSpecifications {
                abrasion_resistance: abrasion.to_string(),
                ..Default::default()
            },
            variants: vec![variant(1, "Бежевый"), variant(2, "Серый")],
            ..Default::default()
        }
    }

    pub fn velour() -> FabricCategory {
        FabricCategory {
            name: "velour".to_string(),
            name_ru: "Велюр".to_string(),
            description_ru: None,
            collections: vec![
                collection("Monolith", "Монолит", "Велюр", "В наличии", "50 000 циклов"),
                collection("Bamboo", "Бамбук", "Микровелюр", "Под заказ", "30000"),
                collection("Soft Line", "Софт Лайн", "Велюр", "В наличии", "нет данных"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::velour;
    use super::*;

    #[test]
    fn test_find_category_case_insensitive() {
        let categories = vec![velour()];
        assert!(find_category(&categories, "VELOUR").is_some());
        assert!(find_category(&categories, "chenille").is_none());
    }

    #[test]
    fn test_find_collection_by_encoded_russian_name() {
        let category = velour();
        let found = category.find_collection("%D0%A1%D0%BE%D1%84%D1%82%20%D0%9B%D0%B0%D0%B9%D0%BD");
        assert_eq!(found.map(|c| c.name.as_str()), Some("Soft Line"));
        assert_eq!(
            category.find_collection("soft%20line").map(|c| c.name_ru.as_str()),
            Some("Софт Лайн")
        );
    }

    #[test]
    fn test_fabric_item_id() {
        assert_eq!(fabric_item_id("velour", "Monolith", 3), "velour-Monolith-3");
    }

    #[test]
    fn test_deserialize_collection() {
        let json = r#"{
            "name": "Monolith", "name_ru": "Монолит", "type": "Велюр",
            "availability": "В наличии",
            "technicalSpecifications": {
                "fabricType": "велюр", "abrasionResistance": "50 000 циклов",
                "density": "320 г/м2", "composition": "100% PES",
                "composition_ru": "100% полиэстер", "width": "140 см",
                "origin": "Turkey", "origin_ru": "Турция",
                "applicationAreas_ru": ["мебель"]
            },
            "careInstructions_ru": ["Сухая чистка"],
            "variants": [{"id": 1, "color": {"en": "beige", "ru": "бежевый"}, "image": "1.jpg"}]
        }"#;
        let collection: FabricCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.kind, "Велюр");
        assert_eq!(collection.technical_specifications.origin_ru, "Турция");
        assert_eq!(
            collection.technical_specifications.application_areas_ru,
            Some(vec!["мебель".to_string()])
        );
        assert_eq!(collection.variant(1).map(|v| v.color.ru.as_str()), Some("бежевый"));
    }
}
