//! Price resolution for configured items.
//!
//! A configuration is a size (optional) plus a set of add-on ids. The unit price is the
//! size price, or the base price when no known size is chosen, plus the price of each
//! selected add-on the item actually offers. Ids the item does not know are ignored.

use crate::model::{LineItem, MenuItem};

/// What the customer picked on the item page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemConfiguration {
    pub size: Option<String>,
    pub addons: Vec<String>,
    pub quantity: u32,
}

impl ItemConfiguration {
    pub fn new() -> Self {
        Self {
            size: None,
            addons: Vec::new(),
            quantity: 1,
        }
    }

    pub fn size(mut self, id: impl Into<String>) -> Self {
        self.size = Some(id.into());
        self
    }

    pub fn addon(mut self, id: impl Into<String>) -> Self {
        self.addons.push(id.into());
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Rounds to whole cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unit price of `item` with `config` applied.
pub fn resolve_unit_price(item: &MenuItem, config: &ItemConfiguration) -> f64 {
    let base = config
        .size
        .as_deref()
        .and_then(|id| item.size(id))
        .map_or(item.price, |s| s.price);
    let addons: f64 = recognized_addons(item, config)
        .iter()
        .filter_map(|id| item.addon(id))
        .map(|a| a.price)
        .sum();
    round_cents(base + addons)
}

/// Unit price times the quantity (at least one).
pub fn resolve_total(item: &MenuItem, config: &ItemConfiguration) -> f64 {
    round_cents(resolve_unit_price(item, config) * f64::from(config.quantity.max(1)))
}

/// Selected add-on ids the item offers, deduplicated and sorted.
fn recognized_addons<'a>(item: &MenuItem, config: &'a ItemConfiguration) -> Vec<&'a str> {
    let mut ids: Vec<&str> = config
        .addons
        .iter()
        .map(String::as_str)
        .filter(|id| item.addon(id).is_some())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Identity of a configured item inside a cart: `{item}-{size|default}-{addons|plain}`.
///
/// Two configurations with the same item, known size and add-on set get the same id,
/// whatever order the add-ons were picked in.
pub fn line_item_id(item: &MenuItem, config: &ItemConfiguration) -> String {
    let size = config
        .size
        .as_deref()
        .filter(|id| item.size(id).is_some())
        .unwrap_or("default");
    let addons = recognized_addons(item, config);
    let addons = if addons.is_empty() {
        "plain".to_string()
    } else {
        addons.join("+")
    };
    format!("{}-{}-{}", item.id, size, addons)
}

/// Snapshots `item` with `config` applied into a cart line.
pub fn build_line_item(item: &MenuItem, config: &ItemConfiguration) -> LineItem {
    let size = config
        .size
        .as_deref()
        .and_then(|id| item.size(id))
        .map(|s| s.name.clone());
    let addons: Vec<String> = recognized_addons(item, config)
        .into_iter()
        .filter_map(|id| item.addon(id))
        .map(|a| a.name.clone())
        .collect();
    LineItem {
        id: line_item_id(item, config),
        item_id: item.id.clone(),
        name: item.name.clone(),
        price: resolve_unit_price(item, config),
        image: item.image.clone(),
        restaurant: item.restaurant.clone(),
        quantity: config.quantity.max(1),
        size,
        addons: (!addons.is_empty()).then_some(addons),
    }
}
