//! The shared customer registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::observability::metrics;
use crate::store::customer::{Customer, CustomerDraft};
use crate::store::seed::seed_customers;

/// Errors raised by store lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("customer {id} not found")]
    NotFound { id: String },
}

impl StoreError {
    fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

/// A thread-safe, cloneable handle to the customer records.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct CustomerStore {
    inner: Arc<RwLock<BTreeMap<String, Customer>>>,
}

impl CustomerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the four seed customers.
    pub fn seeded() -> Self {
        Self::from_records(seed_customers())
    }

    /// Create a store from existing records, keyed by their own ids.
    pub fn from_records(records: impl IntoIterator<Item = Customer>) -> Self {
        let map: BTreeMap<_, _> = records
            .into_iter()
            .map(|customer| (customer.id.clone(), customer))
            .collect();
        metrics::record_store_size(map.len());
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// All current records, in key order.
    pub async fn list(&self) -> Vec<Customer> {
        self.inner.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Result<Customer, StoreError> {
        self.inner
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// Insert a new record under a freshly assigned id.
    pub async fn create(&self, draft: CustomerDraft) -> Customer {
        let mut records = self.inner.write().await;
        let id = next_id(&records);
        let customer = draft.into_customer(id.clone());
        records.insert(id, customer.clone());

        tracing::debug!(id = %customer.id, size = records.len(), "Customer created");
        metrics::record_store_size(records.len());
        customer
    }

    /// Replace every field of an existing record. The record keeps `id`.
    pub async fn update(&self, id: &str, draft: CustomerDraft) -> Result<Customer, StoreError> {
        let mut records = self.inner.write().await;
        let slot = records.get_mut(id).ok_or_else(|| StoreError::not_found(id))?;
        *slot = draft.into_customer(id);

        tracing::debug!(id = %id, "Customer updated");
        Ok(slot.clone())
    }

    /// Remove a record, returning every record that remains.
    pub async fn delete(&self, id: &str) -> Result<BTreeMap<String, Customer>, StoreError> {
        let mut records = self.inner.write().await;
        records.remove(id).ok_or_else(|| StoreError::not_found(id))?;

        tracing::debug!(id = %id, size = records.len(), "Customer deleted");
        metrics::record_store_size(records.len());
        Ok(records.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

/// First free decimal id, scanning upward from `len + 1`.
fn next_id(records: &BTreeMap<String, Customer>) -> String {
    let mut candidate = records.len() + 1;
    while records.contains_key(&candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
