//! Catalog models.

use bistro::{
    cart::{MenuItemId, NewLineItem},
    ids::TypedId,
    prices::{Price, PriceError},
};
use serde::Deserialize;

/// Restaurant identifier
pub type RestaurantId = TypedId<Restaurant>;

/// Entry of the restaurant listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    #[serde(rename = "_id")]
    pub id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub rating: f64,
}

/// A restaurant with its menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: RestaurantId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub main_image: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

/// Restaurant reference embedded in menu listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestaurantRef {
    #[serde(rename = "_id")]
    pub id: RestaurantId,
    pub name: String,
}

/// A dish as served by the catalog. `price` is in euros.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub restaurant: Option<RestaurantRef>,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

const fn available_by_default() -> bool {
    true
}

impl MenuItem {
    /// Price in minor units.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] for negative or non-finite prices.
    pub fn unit_price(&self) -> Result<Price, PriceError> {
        Price::from_major(self.price)
    }

    /// Describe this dish for [`bistro::cart::Cart::add`].
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the price cannot be converted.
    pub fn to_line_item(&self) -> Result<NewLineItem, PriceError> {
        Ok(NewLineItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.unit_price()?,
            image: self.image.clone(),
            category: self.category.clone(),
        })
    }
}

/// Body of `GET /api/menu`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuResponse {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}
