//! Cart
//!
//! The cart keeps at most one line per menu item, in order of first addition.
//! Totals are never stored; every read walks the current lines.

use std::num::NonZeroU32;

use rusty_money::{Money, MoneyError, iso};

use crate::prices::Price;

mod line_item;

pub use line_item::{LineItem, MenuItemId, NewLineItem};

/// Orders from this amount ship for free.
pub const FREE_DELIVERY_THRESHOLD: Price = Price::from_minor(30_00);

/// Shopping cart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of an item.
    ///
    /// A new line is appended with quantity one. If the item is already in the
    /// cart its quantity goes up by one and the stored name, price, image and
    /// category are left as they were.
    pub fn add(&mut self, item: NewLineItem) {
        match self.line_mut(&item.id) {
            Some(line) => line.bump(),
            None => self.items.push(LineItem::new(item)),
        }
    }

    /// Set the quantity of a line.
    ///
    /// A quantity of zero or less removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &MenuItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);

        if let Some(line) = self.line_mut(id) {
            line.set_quantity(quantity);
        }
    }

    /// Add one to a line's quantity. Unknown ids are ignored.
    pub fn increment(&mut self, id: &MenuItemId) {
        if let Some(line) = self.line_mut(id) {
            line.bump();
        }
    }

    /// Take one off a line's quantity, removing the line when it reaches zero.
    /// Unknown ids are ignored.
    pub fn decrement(&mut self, id: &MenuItemId) {
        if let Some(quantity) = self.line(id).map(LineItem::quantity) {
            self.update_quantity(id, i64::from(quantity) - 1);
        }
    }

    /// Remove a line if present.
    pub fn remove(&mut self, id: &MenuItemId) {
        self.items.retain(|line| line.id() != id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Look up a line by menu item id.
    pub fn line(&self, id: &MenuItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id() == id)
    }

    fn line_mut(&mut self, id: &MenuItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|line| line.id() == id)
    }

    /// Lines in order of first addition.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over the lines in order of first addition.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Sum of `price × quantity` over all lines, in euros.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the sum overflows.
    pub fn total(&self) -> Result<Money<'static, iso::Currency>, MoneyError> {
        self.items
            .iter()
            .try_fold(Money::from_minor(0, iso::EUR), |total, line| {
                total.add(line.subtotal()?)
            })
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Whether the total reaches [`FREE_DELIVERY_THRESHOLD`].
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the total cannot be computed.
    pub fn qualifies_for_free_delivery(&self) -> Result<bool, MoneyError> {
        self.total()?.gte(&FREE_DELIVERY_THRESHOLD.to_money())
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn item(id: &str, price: u64) -> NewLineItem {
        NewLineItem {
            id: id.into(),
            name: format!("Item {id}"),
            price: Price::from_minor(price),
            image: format!("{id}.jpg"),
            category: "plats".to_string(),
        }
    }

    fn id(raw: &str) -> MenuItemId {
        MenuItemId::from(raw)
    }

    fn euros(minor: i64) -> Money<'static, iso::Currency> {
        Money::from_minor(minor, iso::EUR)
    }

    #[test]
    fn new_cart_is_empty() -> TestResult {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total()?, euros(0));
        assert_eq!(cart.item_count(), 0);

        Ok(())
    }

    #[test]
    fn adding_same_item_merges_lines() -> TestResult {
        let mut cart = Cart::new();

        for _ in 0..4 {
            cart.add(item("a", 10_00));
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(&id("a")).ok_or("missing line")?.quantity(), 4);

        Ok(())
    }

    #[test]
    fn re_adding_keeps_original_metadata() -> TestResult {
        let mut cart = Cart::new();

        cart.add(item("a", 10_00));
        cart.add(NewLineItem {
            name: "Renamed".to_string(),
            price: Price::from_minor(99_00),
            ..item("a", 0)
        });

        let line = cart.line(&id("a")).ok_or("missing line")?;

        assert_eq!(line.name(), "Item a");
        assert_eq!(line.price(), Price::from_minor(10_00));
        assert_eq!(line.quantity(), 2);

        Ok(())
    }

    #[test]
    fn lines_keep_first_addition_order() {
        let mut cart = Cart::new();

        cart.add(item("b", 1_00));
        cart.add(item("a", 1_00));
        cart.add(item("b", 1_00));

        let ids: Vec<&str> = cart.iter().map(|line| line.id().as_str()).collect();

        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn update_quantity_sets_value() -> TestResult {
        let mut cart = Cart::new();

        cart.add(item("a", 2_50));
        cart.update_quantity(&id("a"), 7);

        assert_eq!(cart.line(&id("a")).ok_or("missing line")?.quantity(), 7);
        assert_eq!(cart.total()?, euros(17_50));

        Ok(())
    }

    #[test]
    fn update_quantity_to_zero_or_less_removes_line() {
        let mut cart = Cart::new();

        cart.add(item("a", 1_00));
        cart.add(item("b", 1_00));

        cart.update_quantity(&id("a"), 0);
        cart.update_quantity(&id("b"), -1);

        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();

        cart.add(item("a", 1_00));
        let before = cart.clone();

        cart.update_quantity(&id("zzz"), 5);
        cart.update_quantity(&id("zzz"), 0);

        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_clamps_huge_values() -> TestResult {
        let mut cart = Cart::new();

        cart.add(item("a", 1));
        cart.update_quantity(&id("a"), i64::MAX);

        assert_eq!(
            cart.line(&id("a")).ok_or("missing line")?.quantity(),
            u32::MAX
        );

        Ok(())
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();

        cart.add(item("a", 1_00));
        cart.add(item("b", 1_00));

        cart.remove(&id("a"));
        let after_first = cart.clone();
        cart.remove(&id("a"));

        assert_eq!(cart, after_first);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_empties_cart_and_is_idempotent() {
        let mut cart = Cart::new();

        cart.add(item("a", 1_00));
        cart.clear();
        assert!(cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn increment_and_decrement() -> TestResult {
        let mut cart = Cart::new();

        cart.add(item("a", 1_00));
        cart.increment(&id("a"));
        assert_eq!(cart.line(&id("a")).ok_or("missing line")?.quantity(), 2);

        cart.decrement(&id("a"));
        assert_eq!(cart.line(&id("a")).ok_or("missing line")?.quantity(), 1);

        cart.decrement(&id("a"));
        assert!(cart.line(&id("a")).is_none());

        cart.increment(&id("a"));
        cart.decrement(&id("a"));
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn totals_track_every_mutation() -> TestResult {
        let mut cart = Cart::new();

        cart.add(item("a", 10_00));
        cart.add(item("a", 10_00));
        cart.add(item("b", 5_00));

        assert_eq!(cart.total()?, euros(25_00));
        assert_eq!(cart.item_count(), 3);

        cart.update_quantity(&id("b"), 4);
        assert_eq!(cart.total()?, euros(40_00));
        assert_eq!(cart.item_count(), 6);

        cart.remove(&id("a"));
        assert_eq!(cart.total()?, euros(20_00));
        assert_eq!(cart.item_count(), 4);

        Ok(())
    }

    #[test]
    fn free_delivery_from_threshold() -> TestResult {
        let mut cart = Cart::new();

        cart.add(item("a", 29_99));
        assert!(!cart.qualifies_for_free_delivery()?);

        cart.add(item("b", 1));
        assert!(cart.qualifies_for_free_delivery()?);

        Ok(())
    }

    #[test]
    fn total_keeps_cent_precision() -> TestResult {
        let mut cart = Cart::new();

        cart.add(item("a", 3_33));
        cart.update_quantity(&id("a"), 3);
        cart.add(item("b", 1));

        assert_eq!(cart.total()?, euros(10_00));
        assert_eq!(Price::try_from(cart.total()?)?, Price::from_minor(10_00));

        Ok(())
    }
}
