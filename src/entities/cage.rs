//! Cage entity type (parts-storage enclosure)

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind};
use crate::core::error::WorkshopError;

/// Occupancy status of a cage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CageStatus {
    Active,
    Empty,
    PendingPickup,
}

impl CageStatus {
    pub const ALL: [CageStatus; 3] = [
        CageStatus::Active,
        CageStatus::Empty,
        CageStatus::PendingPickup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CageStatus::Active => "active",
            CageStatus::Empty => "empty",
            CageStatus::PendingPickup => "pending_pickup",
        }
    }
}

impl std::fmt::Display for CageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CageStatus {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(CageStatus::Active),
            "empty" => Ok(CageStatus::Empty),
            "pending_pickup" => Ok(CageStatus::PendingPickup),
            _ => Err(WorkshopError::unknown_variant(
                "cage status",
                s,
                CageStatus::ALL.iter().map(CageStatus::as_str),
            )),
        }
    }
}

/// A numbered storage cage on the shop floor
///
/// `project_id` and `project_name` are empty strings when the cage is
/// unassigned; use [`Cage::assignment`] to read them as an `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cage {
    pub id: String,

    /// Display key printed on the label, e.g. "C-012"
    pub number: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub project_name: String,

    /// "Row C, Bay 2"
    pub location: String,

    #[serde(default)]
    pub parts_count: u32,

    pub status: CageStatus,
}

/// The project a cage is reserved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CageAssignment<'a> {
    pub project_id: &'a str,
    pub project_name: &'a str,
}

impl Cage {
    pub fn assignment(&self) -> Option<CageAssignment<'_>> {
        if self.project_id.is_empty() {
            None
        } else {
            Some(CageAssignment {
                project_id: &self.project_id,
                project_name: &self.project_name,
            })
        }
    }

    /// First `words` words of the project name, as printed on the cage label
    pub fn short_project_name(&self, words: usize) -> String {
        self.project_name
            .split(' ')
            .take(words)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Entity for Cage {
    const KIND: EntityKind = EntityKind::Cage;

    fn key(&self) -> &str {
        &self.number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cage(project_id: &str, project_name: &str) -> Cage {
        Cage {
            id: "cage-001".to_string(),
            number: "C-001".to_string(),
            project_id: project_id.to_string(),
            project_name: project_name.to_string(),
            location: "Row A, Bay 1".to_string(),
            parts_count: 24,
            status: CageStatus::Active,
        }
    }

    #[test]
    fn test_empty_sentinel_means_unassigned() {
        assert!(cage("", "").assignment().is_none());

        let assigned = cage("proj-003", "1967 Camaro RS/SS");
        let assignment = assigned.assignment().unwrap();
        assert_eq!(assignment.project_id, "proj-003");
        assert_eq!(assignment.project_name, "1967 Camaro RS/SS");
    }

    #[test]
    fn test_short_project_name() {
        let c = cage("proj-003", "1967 Camaro RS/SS");
        assert_eq!(c.short_project_name(2), "1967 Camaro");
        assert_eq!(c.short_project_name(10), "1967 Camaro RS/SS");
        assert_eq!(cage("", "").short_project_name(2), "");
    }

    #[test]
    fn test_cage_status_serde() {
        let json = serde_json::to_string(&CageStatus::PendingPickup).unwrap();
        assert_eq!(json, "\"pending_pickup\"");
    }
}
