//! Team roster entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{Department, Entity, EntityKind};
use crate::core::error::WorkshopError;

/// Staff roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Technician,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Technician];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Technician => "technician",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "technician" => Ok(Role::Technician),
            _ => Err(WorkshopError::unknown_variant(
                "role",
                s,
                Role::ALL.iter().map(Role::as_str),
            )),
        }
    }
}

/// A member of staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub department: Department,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Hand-maintained, not counted from task assignments
    #[serde(default)]
    pub active_projects: u32,
}

impl Entity for TeamMember {
    const KIND: EntityKind = EntityKind::TeamMember;

    fn key(&self) -> &str {
        &self.id
    }
}
