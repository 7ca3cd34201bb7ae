//! Menu items as served by the [`Catalog`](crate::catalog::Catalog).
//!
//! Field names serialize in camelCase (`ratingCount`, `glutenFree`) so a menu file
//! exported from the web storefront loads unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A dish on the menu. Read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Base price, used when no size is selected.
    pub price: f64,
    pub image: String,
    pub restaurant: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<String>,
    pub calories: u32,
    /// Preparation time in minutes.
    pub time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub dietary: Dietary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<SizeOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Vec<AddonOption>>,
}

impl MenuItem {
    pub fn sizes(&self) -> &[SizeOption] {
        self.sizes.as_deref().unwrap_or_default()
    }

    pub fn ingredients(&self) -> &[IngredientOption] {
        self.ingredients.as_deref().unwrap_or_default()
    }

    pub fn addons(&self) -> &[AddonOption] {
        self.addons.as_deref().unwrap_or_default()
    }

    pub fn size(&self, id: &str) -> Option<&SizeOption> {
        self.sizes().iter().find(|s| s.id == id)
    }

    pub fn addon(&self, id: &str) -> Option<&AddonOption> {
        self.addons().iter().find(|a| a.id == id)
    }

    /// Rating with a missing value read as 0, the way the rating sort treats it.
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }

    /// Every price on the item: base, sizes, ingredients and add-ons.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(self.price)
            .chain(self.sizes().iter().map(|s| s.price))
            .chain(self.ingredients().iter().map(|i| i.price))
            .chain(self.addons().iter().map(|a| a.price))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeOption {
    pub id: String,
    pub name: String,
    /// Replaces the base price when selected.
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientOption {
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonOption {
    pub id: String,
    pub name: String,
    pub weight: String,
    /// Added on top of the size or base price.
    pub price: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dietary {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub halal: bool,
    pub spicy: bool,
}

impl Dietary {
    pub fn has(&self, flag: DietaryFlag) -> bool {
        match flag {
            DietaryFlag::Vegetarian => self.vegetarian,
            DietaryFlag::Vegan => self.vegan,
            DietaryFlag::GlutenFree => self.gluten_free,
            DietaryFlag::Halal => self.halal,
            DietaryFlag::Spicy => self.spicy,
        }
    }
}

/// A dietary property a search can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietaryFlag {
    Vegetarian,
    Vegan,
    GlutenFree,
    Halal,
    Spicy,
}

impl DietaryFlag {
    pub const ALL: [DietaryFlag; 5] = [
        DietaryFlag::Vegetarian,
        DietaryFlag::Vegan,
        DietaryFlag::GlutenFree,
        DietaryFlag::Halal,
        DietaryFlag::Spicy,
    ];

    /// Storage key, matching the serialized field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryFlag::Vegetarian => "vegetarian",
            DietaryFlag::Vegan => "vegan",
            DietaryFlag::GlutenFree => "glutenFree",
            DietaryFlag::Halal => "halal",
            DietaryFlag::Spicy => "spicy",
        }
    }

    /// Human label, as shown on filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            DietaryFlag::Vegetarian => "Vegetarian",
            DietaryFlag::Vegan => "Vegan",
            DietaryFlag::GlutenFree => "Gluten Free",
            DietaryFlag::Halal => "Halal",
            DietaryFlag::Spicy => "Spicy",
        }
    }
}

impl fmt::Display for DietaryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
