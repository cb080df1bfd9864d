//! Vehicle entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::{Entity, EntityKind};

/// A car in the workshop, owned by one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,

    /// Owning customer
    pub customer_id: String,

    pub year: u16,

    pub make: String,

    pub model: String,

    /// Chassis number as recorded (not validated)
    pub vin: String,

    pub color: String,

    /// Free-text condition on intake
    pub condition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Vehicle {
    /// "1969 Ford Mustang Boss 429"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

impl Entity for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_title() {
        let vehicle = Vehicle {
            id: "veh-005".to_string(),
            customer_id: "cust-005".to_string(),
            year: 1968,
            make: "Dodge".to_string(),
            model: "Charger R/T".to_string(),
            vin: "XS29L8B123456".to_string(),
            color: "Black".to_string(),
            condition: "Full restoration".to_string(),
            image_url: None,
        };
        assert_eq!(vehicle.title(), "1968 Dodge Charger R/T");

        let json = serde_json::to_string(&vehicle).unwrap();
        assert!(json.contains("\"customerId\":\"cust-005\""));
        assert!(!json.contains("imageUrl"));
    }
}
