//! Prices

use std::fmt::{self, Display, Formatter};

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use rusty_money::{Money, MoneyError, Round, iso};
use thiserror::Error;

/// Errors raised when converting an amount into a [`Price`].
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The price was negative.
    #[error("price {0} is negative")]
    Negative(f64),

    /// The price was NaN or infinite.
    #[error("price is not a finite number")]
    NotFinite,

    /// The price does not fit in minor units.
    #[error("price {0} is out of range")]
    OutOfRange(f64),

    /// The amount is not in euros.
    #[error("expected a EUR amount, got {0}")]
    Currency(&'static str),

    /// Wrapped money conversion error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// A non-negative euro amount held in cents.
///
/// Arithmetic happens on [`Money`]; a `Price` is what enters the cart and what
/// gets shown to the customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    minor: u64,
}

impl Price {
    /// Creates a price from cents.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Price { minor }
    }

    /// Converts a decimal euro amount, as sent by the backend, rounding to the
    /// nearest cent with halves away from zero.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] when the amount is negative, not finite, or too
    /// large to represent.
    pub fn from_major(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotFinite);
        }

        if amount < 0.0 {
            return Err(PriceError::Negative(amount));
        }

        let major = Decimal::from_f64(amount).ok_or(PriceError::OutOfRange(amount))?;

        let minor = major
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_u64())
            .ok_or(PriceError::OutOfRange(amount))?;

        Ok(Self::from_minor(minor))
    }

    /// Converts euro money back into a price, rounding to the nearest cent.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] for other currencies, negative amounts, or
    /// amounts beyond the cent range.
    pub fn from_money(money: &Money<'_, iso::Currency>) -> Result<Self, PriceError> {
        let currency = money.currency();

        if currency != iso::EUR {
            return Err(PriceError::Currency(currency.iso_alpha_code));
        }

        let minor = money
            .round(currency.exponent, Round::HalfUp)
            .try_to_minor_units()?;

        u64::try_from(minor)
            .map(Self::from_minor)
            .map_err(|_| PriceError::Negative(money.to_f64_lossy()))
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn to_minor_units(self) -> u64 {
        self.minor
    }

    /// Returns the amount as euro money.
    pub fn to_money(self) -> Money<'static, iso::Currency> {
        Money::from_minor(i64::try_from(self.minor).unwrap_or(i64::MAX), iso::EUR)
    }
}

impl TryFrom<Money<'_, iso::Currency>> for Price {
    type Error = PriceError;

    fn try_from(money: Money<'_, iso::Currency>) -> Result<Self, Self::Error> {
        Self::from_money(&money)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}€", self.minor / 100, self.minor % 100)
    }
}
