//! Customer Registry Library
//!
//! An HTTP service exposing create/read/update/delete operations over an
//! in-memory collection of customer records.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::schema::RegistryConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Customer, CustomerDraft, CustomerStore, StoreError};
