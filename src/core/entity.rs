//! Entity trait - common interface for all workshop records

use serde::{de::DeserializeOwned, Serialize};

use crate::core::error::WorkshopError;

/// The collections a [`crate::core::Workshop`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Vehicle,
    Project,
    Cage,
    TeamMember,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Customer => write!(f, "customer"),
            EntityKind::Vehicle => write!(f, "vehicle"),
            EntityKind::Project => write!(f, "project"),
            EntityKind::Cage => write!(f, "cage"),
            EntityKind::TeamMember => write!(f, "team member"),
        }
    }
}

/// Common trait for all top-level workshop records
pub trait Entity: Serialize + DeserializeOwned {
    /// Which collection this record lives in
    const KIND: EntityKind;

    /// The key the record is looked up by (unique within its collection)
    fn key(&self) -> &str;
}

/// Workshop departments; tasks are routed to one and team members belong to one
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Body,
    Wiring,
    Interior,
    Engineering,
    Paint,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Body,
        Department::Wiring,
        Department::Interior,
        Department::Engineering,
        Department::Paint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Body => "body",
            Department::Wiring => "wiring",
            Department::Interior => "interior",
            Department::Engineering => "engineering",
            Department::Paint => "paint",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Department {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "body" => Ok(Department::Body),
            "wiring" => Ok(Department::Wiring),
            "interior" => Ok(Department::Interior),
            "engineering" => Ok(Department::Engineering),
            "paint" => Ok(Department::Paint),
            _ => Err(WorkshopError::unknown_variant(
                "department",
                s,
                Department::ALL.iter().map(Department::as_str),
            )),
        }
    }
}

/// Task priority
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(WorkshopError::unknown_variant(
                "priority",
                s,
                Priority::ALL.iter().map(Priority::as_str),
            )),
        }
    }
}
