//! Cart line items

use std::num::NonZeroU32;

use rusty_money::{Money, MoneyError, iso::Currency};

use crate::{ids::TypedId, prices::Price};

/// Identifier of the menu item a cart line stands for.
pub type MenuItemId = TypedId<LineItem>;

/// Item descriptor handed to [`Cart::add`](super::Cart::add).
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    /// Menu item identifier.
    pub id: MenuItemId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Price,

    /// Image URL.
    pub image: String,

    /// Menu category, e.g. `plats`.
    pub category: String,
}

/// One distinct menu item and its quantity within a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    id: MenuItemId,
    name: String,
    image: String,
    category: String,
    price: Price,
    quantity: NonZeroU32,
}

impl LineItem {
    pub(super) fn new(item: NewLineItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            image: item.image,
            category: item.category,
            price: item.price,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Returns the menu item identifier.
    pub fn id(&self) -> &MenuItemId {
        &self.id
    }

    /// Returns the name copied when the item was first added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the image URL copied when the item was first added.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the category copied when the item was first added.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the unit price copied when the item was first added.
    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Returns `price × quantity` as euro money.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the multiplication overflows.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, MoneyError> {
        self.price.to_money().mul(self.quantity.get())
    }

    pub(super) fn bump(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub(super) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}
