//! Customer record types.

use serde::{Deserialize, Serialize};

/// A stored customer record.
///
/// `id` always equals the key the record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    /// Whether the customer has been contacted.
    pub contacted: bool,
}

/// Client-supplied customer fields for create and update.
///
/// Missing fields decode to their zero value. An `id` in the payload is
/// ignored; the store decides ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

impl CustomerDraft {
    /// Attach an identifier, producing a storable record.
    pub fn into_customer(self, id: impl Into<String>) -> Customer {
        Customer {
            id: id.into(),
            name: self.name,
            role: self.role,
            email: self.email,
            phone: self.phone,
            contacted: self.contacted,
        }
    }
}
