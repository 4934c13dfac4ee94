//! Client SDK for the customer registry HTTP API.

mod client;

pub use client::{ClientError, Customer, CustomerDraft, RegistryClient};
