//! Bistro client services: backend access, session handling and logging.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod context;
pub mod http;
pub mod observability;
pub mod session;

#[cfg(test)]
mod test_helpers;
