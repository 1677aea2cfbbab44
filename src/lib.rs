//! Bistro
//!
//! Client-side session core for a restaurant ordering application: the cart,
//! the signed-in session and the access guard for protected views.

pub mod cart;
pub mod ids;
pub mod prelude;
pub mod prices;
pub mod receipt;
pub mod routes;
pub mod session;
