//! Receipt

use std::io;

use rusty_money::MoneyError;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::{Cart, FREE_DELIVERY_THRESHOLD},
    prices::{Price, PriceError},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Writing to the output failed.
    #[error("failed to write receipt")]
    Io(#[from] io::Error),

    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// An amount could not be shown as a price.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Write the cart as a table followed by its totals.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if an amount cannot be computed or the output
/// cannot be written.
pub fn write_cart(mut out: impl io::Write, cart: &Cart) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Item", "Category", "Unit Price", "Qty", "Subtotal"]);

    for line in cart {
        builder.push_record([
            line.name().to_string(),
            line.category().to_string(),
            line.price().to_string(),
            line.quantity().to_string(),
            Price::try_from(line.subtotal()?)?.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")?;

    let count = cart.item_count();
    let noun = if count == 1 { "item" } else { "items" };

    let total = Price::try_from(cart.total()?)?;

    writeln!(out, "{count} {noun}, total {total}")?;

    if cart.qualifies_for_free_delivery()? {
        writeln!(out, "Free delivery")?;
    } else {
        writeln!(out, "Free delivery from {FREE_DELIVERY_THRESHOLD}")?;
    }

    Ok(())
}
