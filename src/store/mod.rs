//! In-memory customer record store.
//!
//! # Data Flow
//! ```text
//! handler
//!     → CustomerStore (RwLock<BTreeMap<id, Customer>>)
//!         reads:  read guard  (list, get, len)
//!         writes: write guard (create, update, delete)
//!     → Customer / StoreError::NotFound
//! ```
//!
//! # Design Decisions
//! - The store is the sole owner of every record; callers get clones
//! - Every read-modify-write runs under a single write guard
//! - Ids are assigned by the store, never by the caller
//! - Nothing is persisted; state lives for the process lifetime

pub mod customer;
pub mod registry;
pub mod seed;

pub use customer::{Customer, CustomerDraft};
pub use registry::{CustomerStore, StoreError};
