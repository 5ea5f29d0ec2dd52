//! Remote Client
//!
//! REST access to the orders service.
//! `OrderApi` is the seam the controller talks to; `HttpOrderApi` is the real
//! implementation over reqwest.

mod config;
mod error;
mod traits;
mod http;

pub use config::ApiConfig;
pub use error::{ApiError, Operation};
pub use traits::OrderApi;
pub use http::HttpOrderApi;
