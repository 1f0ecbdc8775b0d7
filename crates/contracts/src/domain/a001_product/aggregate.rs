use serde::{Deserialize, Serialize};

use crate::enums::product_category::ProductCategory;

// ============================================================================
// Value objects
// ============================================================================

/// Цена товара: текущая и (необязательно) старая зачёркнутая
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Price {
    pub current: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<f64>,
}

/// Размер дивана
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub length: u32,
    pub price: f64,
}

/// Подъёмный механизм кровати
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mechanism {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}

/// Размер кровати вместе с вариантами механизма
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SizeWithMechanism {
    pub width: u32,
    pub length: u32,
    pub price: f64,
    #[serde(default)]
    pub lifting_mechanism: Vec<Mechanism>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SofaSizes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sofa: Option<Vec<Size>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalizedTitles {
    pub ru: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Material {
    #[serde(rename = "localizedTitles")]
    pub localized_titles: LocalizedTitles,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstallmentTerms {
    pub duration_months: u32,
    pub interest: String,
    pub additional_fees: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreditTerms {
    pub duration_months: u32,
    pub interest: String,
}

/// Условия рассрочки/кредита от банка
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstallmentPlan {
    pub bank: String,
    pub installment: InstallmentTerms,
    pub credit: CreditTerms,
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога (диван или кровать).
///
/// Кровать отличается наличием таблицы размеров `bed`; у дивана
/// размеры лежат в `sizes.sofa`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub price: Price,
    #[serde(default)]
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub warranty: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub installment_plans: Vec<InstallmentPlan>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<SofaSizes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed: Option<Vec<SizeWithMechanism>>,
}

impl Product {
    pub fn category(&self) -> ProductCategory {
        if self.bed.is_some() {
            ProductCategory::Bed
        } else {
            ProductCategory::Sofa
        }
    }

    pub fn is_bed(&self) -> bool {
        self.category() == ProductCategory::Bed
    }

    /// Первое изображение (для карточек)
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Доступные размеры с ценой, независимо от вида товара
    pub fn size_options(&self) -> Vec<Size> {
        match (&self.bed, &self.sizes) {
            (Some(bed), _) => bed
                .iter()
                .map(|s| Size {
                    width: s.width,
                    length: s.length,
                    price: s.price,
                })
                .collect(),
            (None, Some(SofaSizes { sofa: Some(sofa) })) => sofa.clone(),
            _ => Vec::new(),
        }
    }

    /// Есть ли у выбранного размера кровати платный подъёмный механизм
    pub fn has_lifting_mechanism(&self, selected_size: Option<usize>) -> bool {
        self.mechanism_for(selected_size).is_some()
    }

    fn mechanism_for(&self, selected_size: Option<usize>) -> Option<&Mechanism> {
        let bed = self.bed.as_ref()?;
        let size = bed.get(selected_size?)?;
        // Первый элемент - вариант без механизма
        if size.lifting_mechanism.len() > 1 {
            size.lifting_mechanism.get(1)
        } else {
            None
        }
    }

    /// Цена выбранной конфигурации товара.
    ///
    /// Без выбранного размера (или без таблицы размеров) используется
    /// текущая цена товара. Для кровати с механизмом добавляется цена механизма.
    pub fn configured_price(&self, selected_size: Option<usize>, with_mechanism: bool) -> f64 {
        let sizes = self.size_options();
        let Some(size) = selected_size.and_then(|i| sizes.get(i)) else {
            return self.price.current;
        };

        let mut price = size.price;
        if with_mechanism {
            if let Some(mechanism) = self.mechanism_for(selected_size) {
                price += mechanism.price;
            }
        }
        price
    }
}

/// Составной ключ позиции корзины: товар + размер + механизм.
///
/// Пустой размер кодируется как `null`, чтобы ключ совпадал с уже
/// сохранёнными в браузере корзинами.
pub fn cart_item_id(product_id: &str, selected_size: Option<usize>, with_mechanism: bool) -> String {
    let size = selected_size
        .map(|s| s.to_string())
        .unwrap_or_else(|| "null".to_string());
    format!("{}-{}-{}", product_id, size, with_mechanism)
}

/// Диапазон цен каталога
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn sofa(id: &str, name: &str, price: f64, popularity: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            slug: format!("sofa-{}", id),
            price: Price {
                current: price,
                old: None,
            },
            popularity,
            sizes: Some(SofaSizes {
                sofa: Some(vec![
                    Size {
                        width: 200,
                        length: 90,
                        price,
                    },
                    Size {
                        width: 240,
                        length: 100,
                        price: price + 5000.0,
                    },
                ]),
            }),
            ..Default::default()
        }
    }

    pub fn bed(id: &str, name: &str, price: f64, popularity: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            slug: format!("bed-{}", id),
            price: Price {
                current: price,
                old: Some(price + 1000.0),
            },
            popularity,
            bed: Some(vec![
                SizeWithMechanism {
                    width: 160,
                    length: 200,
                    price,
                    lifting_mechanism: vec![
                        Mechanism {
                            kind: "Без механизма".to_string(),
                            price: 0.0,
                        },
                        Mechanism {
                            kind: "С механизмом".to_string(),
                            price: 7000.0,
                        },
                    ],
                },
                SizeWithMechanism {
                    width: 180,
                    length: 200,
                    price: price + 3000.0,
                    lifting_mechanism: vec![],
                },
            ]),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{bed, sofa};
    use super::*;

    #[test]
    fn test_category_detected_by_bed_table() {
        assert_eq!(sofa("1", "Честер", 1000.0, 4.0).category(), ProductCategory::Sofa);
        assert_eq!(bed("2", "Лофт", 1000.0, 4.0).category(), ProductCategory::Bed);
    }

    #[test]
    fn test_configured_price() {
        let b = bed("2", "Лофт", 30000.0, 4.0);
        assert_eq!(b.configured_price(None, true), 30000.0);
        assert_eq!(b.configured_price(Some(0), false), 30000.0);
        assert_eq!(b.configured_price(Some(0), true), 37000.0);
        // У второго размера нет платного механизма
        assert_eq!(b.configured_price(Some(1), true), 33000.0);
        assert!(!b.has_lifting_mechanism(Some(1)));
        // Индекс вне диапазона
        assert_eq!(b.configured_price(Some(7), false), 30000.0);

        let s = sofa("1", "Честер", 50000.0, 4.0);
        assert_eq!(s.configured_price(Some(1), true), 55000.0);
    }

    #[test]
    fn test_cart_item_id() {
        assert_eq!(cart_item_id("15", Some(1), true), "15-1-true");
        assert_eq!(cart_item_id("15", None, false), "15-null-false");
    }

    #[test]
    fn test_deserialize_remote_bed() {
        let json = r#"{
            "id": "7", "name": "Кровать Сканди", "slug": "skandi",
            "description": "", "images": ["a.jpg"],
            "price": {"current": 25990},
            "availability": "В наличии", "popularity": 4.8,
            "country": "Россия", "warranty": "18 месяцев",
            "bed": [{"width": 140, "length": 200, "price": 25990,
                     "lifting_mechanism": [{"type": "нет", "price": 0}, {"type": "газлифт", "price": 6000}]}]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.is_bed());
        assert_eq!(product.main_image(), Some("a.jpg"));
        assert_eq!(product.configured_price(Some(0), true), 31990.0);
    }
}
