//! Records loaded into the store at startup.

use super::customer::Customer;

const SEED: [(&str, &str, &str, &str); 4] = [
    ("1", "John Doe", "CEO", "jodo@example.com"),
    ("2", "Jane Doe", "CTO", "jado@example.com"),
    ("3", "John Smith", "CFO", "josm@example.com"),
    ("4", "Jane Smith", "CMO", "jasm@example.com"),
];

const SEED_PHONE: &str = "1234567890";

/// The four seed customers, ids "1" through "4".
pub fn seed_customers() -> Vec<Customer> {
    SEED.iter()
        .map(|(id, name, role, email)| Customer {
            id: (*id).to_string(),
            name: (*name).to_string(),
            role: (*role).to_string(),
            email: (*email).to_string(),
            phone: SEED_PHONE.to_string(),
            contacted: false,
        })
        .collect()
}
