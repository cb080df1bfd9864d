//! Part entity type (procurement line on a project)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::error::WorkshopError;

/// Procurement status of a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartStatus {
    Quoted,
    Ordered,
    InTransit,
    Received,
    Installed,
}

impl PartStatus {
    pub const ALL: [PartStatus; 5] = [
        PartStatus::Quoted,
        PartStatus::Ordered,
        PartStatus::InTransit,
        PartStatus::Received,
        PartStatus::Installed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartStatus::Quoted => "quoted",
            PartStatus::Ordered => "ordered",
            PartStatus::InTransit => "in_transit",
            PartStatus::Received => "received",
            PartStatus::Installed => "installed",
        }
    }
}

impl std::fmt::Display for PartStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PartStatus {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quoted" => Ok(PartStatus::Quoted),
            "ordered" => Ok(PartStatus::Ordered),
            "in_transit" => Ok(PartStatus::InTransit),
            "received" => Ok(PartStatus::Received),
            "installed" => Ok(PartStatus::Installed),
            _ => Err(WorkshopError::unknown_variant(
                "part status",
                s,
                PartStatus::ALL.iter().map(PartStatus::as_str),
            )),
        }
    }
}

/// A part ordered for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub supplier: String,

    pub status: PartStatus,

    pub order_date: NaiveDate,

    pub eta: NaiveDate,

    /// Rand
    pub cost: f64,

    /// Cage the part is stored in; free text, not checked against the cage list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cage_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_status_parse() {
        assert_eq!(
            "in_transit".parse::<PartStatus>().unwrap(),
            PartStatus::InTransit
        );
        assert!("lost".parse::<PartStatus>().is_err());
    }

    #[test]
    fn test_part_optional_fields() {
        let yaml = r#"
id: part-003
name: Quarter Panel - LH
supplier: Dynacorn
status: in_transit
orderDate: "2024-04-20"
eta: "2024-05-10"
cost: 16110
cageNumber: C-013
trackingNumber: DYN-78543
"#;
        let part: Part = serde_yml::from_str(yaml).unwrap();
        assert_eq!(part.status, PartStatus::InTransit);
        assert_eq!(part.cage_number.as_deref(), Some("C-013"));
        assert_eq!(part.tracking_number.as_deref(), Some("DYN-78543"));
        assert!(part.description.is_empty());
    }
}
