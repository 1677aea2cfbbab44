//! Restaurant catalog

mod browse;
mod errors;
mod models;
mod service;

pub use browse::*;
pub use errors::*;
pub use models::*;
pub use service::*;
