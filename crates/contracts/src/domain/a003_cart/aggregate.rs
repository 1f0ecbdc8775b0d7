use serde::{Deserialize, Serialize};

use crate::domain::a001_product::{cart_item_id, Product};
use crate::domain::common::StateContainer;

/// Минимальное количество товара в позиции корзины
pub const MIN_QUANTITY: u32 = 1;

const PRICE_EPSILON: f64 = 1e-9;

// ============================================================================
// Line item
// ============================================================================

/// Позиция корзины мебели.
///
/// `id` - составной ключ товар + размер + механизм, поэтому две
/// конфигурации одного товара являются разными позициями.
/// Цена за единицу хранится явно, `total_price` всегда равен
/// `unit_price * quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product: Product,
    pub quantity: u32,
    pub selected_size: Option<usize>,
    #[serde(default)]
    pub with_mechanism: bool,
    /// Отсутствует в корзинах, сохранённых старыми версиями витрины;
    /// восстанавливается при гидратации
    #[serde(default)]
    pub unit_price: f64,
    pub total_price: f64,
}

impl CartItem {
    /// Собрать позицию из выбранной конфигурации товара
    pub fn new(
        product: Product,
        quantity: u32,
        selected_size: Option<usize>,
        with_mechanism: bool,
    ) -> Self {
        let unit_price = product.configured_price(selected_size, with_mechanism);
        Self {
            id: cart_item_id(&product.id, selected_size, with_mechanism),
            product,
            quantity,
            selected_size,
            with_mechanism,
            unit_price,
            total_price: unit_price * quantity as f64,
        }
    }

    fn normalized(mut self) -> Self {
        if !(self.unit_price.is_finite() && self.unit_price > 0.0) && self.quantity > 0 {
            self.unit_price = self.total_price / self.quantity as f64;
        }
        self
    }

    fn same_configuration(&self, other: &CartItem) -> bool {
        self.id == other.id
            && self.selected_size == other.selected_size
            && self.with_mechanism == other.with_mechanism
    }

    /// Размер позиции в виде "ШxД см", если размер выбран
    pub fn size_label(&self) -> Option<String> {
        let size = self.product.size_options().get(self.selected_size?).copied()?;
        Some(format!("{}x{} см", size.width, size.length))
    }
}

// ============================================================================
// State
// ============================================================================

/// Состояние корзины мебели. Итоги - чистые агрегаты по `items`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddToCart(CartItem),
    RemoveFromCart(String),
    UpdateQuantity { id: String, quantity: u32 },
    ClearCart,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    fn recalculate(&mut self) {
        // Сохранённые данные могут содержать огромные количества
        self.total_items = self
            .items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity));
        self.total_price = self.items.iter().map(|i| i.total_price).sum();
    }

    fn add(&mut self, item: CartItem) -> bool {
        if item.quantity < MIN_QUANTITY {
            log::debug!("Ignoring cart item '{}' with zero quantity", item.id);
            return false;
        }
        let item = item.normalized();

        match self.items.iter_mut().find(|i| i.same_configuration(&item)) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
                existing.total_price += item.total_price;
                // Цена могла измениться между добавлениями
                if (existing.unit_price - item.unit_price).abs() > PRICE_EPSILON {
                    existing.unit_price = existing.total_price / existing.quantity as f64;
                }
            }
            None => self.items.push(item),
        }
        true
    }

    fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        let quantity = quantity.max(MIN_QUANTITY);
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        if item.quantity == quantity {
            return false;
        }
        item.quantity = quantity;
        item.total_price = item.unit_price * quantity as f64;
        true
    }
}

impl StateContainer for CartState {
    type Action = CartAction;
    const STORAGE_KEY: &'static str = "cart";

    fn reduce(&mut self, action: CartAction) -> bool {
        let changed = match action {
            CartAction::AddToCart(item) => self.add(item),
            CartAction::RemoveFromCart(id) => self.remove(&id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(&id, quantity),
            CartAction::ClearCart => {
                let changed = *self != CartState::default();
                *self = CartState::default();
                changed
            }
        };
        if changed {
            self.recalculate();
        }
        changed
    }

    fn replay(persisted: Self) -> Vec<CartAction> {
        persisted.items.into_iter().map(CartAction::AddToCart).collect()
    }
}
