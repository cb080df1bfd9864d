//! Customer entity type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind};

/// A workshop client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier
    pub id: String,

    pub name: String,

    pub email: String,

    pub phone: String,

    /// Postal address, single line
    pub address: String,

    /// Hand-maintained count of the customer's projects (not derived)
    pub project_count: u32,

    /// Date the customer was registered
    pub created_at: NaiveDate,
}

impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn key(&self) -> &str {
        &self.id
    }
}
