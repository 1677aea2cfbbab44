//! Bistro prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, FREE_DELIVERY_THRESHOLD, LineItem, MenuItemId, NewLineItem},
    ids::TypedId,
    prices::{Price, PriceError},
    receipt::{ReceiptError, write_cart},
    routes::{AccessDecision, AccessPolicy, Route, authorize},
    session::{Role, Session, User, UserId},
};
