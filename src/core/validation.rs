//! Fixture consistency checks
//!
//! Nothing enforces referential integrity when fixtures are authored, so
//! `wsm validate` re-checks the invariants a fixture set is expected to hold.

use serde::Serialize;
use std::collections::HashMap;

use crate::core::store::Workshop;
use crate::entities::Project;

/// Which invariant a finding breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    UnknownCustomer,
    VehicleMismatch,
    PhaseOrder,
    DuplicateCage,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rule::UnknownCustomer => "unknown-customer",
            Rule::VehicleMismatch => "vehicle-mismatch",
            Rule::PhaseOrder => "phase-order",
            Rule::DuplicateCage => "duplicate-cage",
        };
        write!(f, "{}", name)
    }
}

/// One broken invariant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: Rule,
    /// Key of the offending record (project id or cage number)
    pub subject: String,
    pub message: String,
}

impl Violation {
    fn new(rule: Rule, subject: &str, message: String) -> Self {
        tracing::warn!(%rule, subject, "{}", message);
        Self {
            rule,
            subject: subject.to_string(),
            message,
        }
    }
}

fn check_customer(workshop: &Workshop, project: &Project, out: &mut Vec<Violation>) {
    if workshop.customer(&project.customer_id).is_err() {
        out.push(Violation::new(
            Rule::UnknownCustomer,
            &project.id,
            format!("customer '{}' does not exist", project.customer_id),
        ));
    }
}

fn check_vehicle(workshop: &Workshop, project: &Project, out: &mut Vec<Violation>) {
    let embedded = &project.vehicle;
    match workshop.vehicle(&project.vehicle_id) {
        Err(_) => out.push(Violation::new(
            Rule::VehicleMismatch,
            &project.id,
            format!("vehicle '{}' does not exist", project.vehicle_id),
        )),
        Ok(vehicle) if vehicle != embedded => out.push(Violation::new(
            Rule::VehicleMismatch,
            &project.id,
            format!(
                "embedded vehicle '{}' differs from vehicle '{}'",
                embedded.id, vehicle.id
            ),
        )),
        Ok(vehicle) if vehicle.customer_id != project.customer_id => {
            out.push(Violation::new(
                Rule::VehicleMismatch,
                &project.id,
                format!(
                    "vehicle '{}' belongs to '{}', not '{}'",
                    vehicle.id, vehicle.customer_id, project.customer_id
                ),
            ))
        }
        Ok(_) => {}
    }
}

/// Phase orders must be exactly 1..=n
fn check_phase_order(project: &Project, out: &mut Vec<Violation>) {
    let mut orders: Vec<u32> = project.phases.iter().map(|p| p.order).collect();
    orders.sort_unstable();
    let contiguous = orders
        .iter()
        .enumerate()
        .all(|(i, order)| *order as usize == i + 1);
    if !contiguous {
        let listed: Vec<String> = orders.iter().map(|o| o.to_string()).collect();
        out.push(Violation::new(
            Rule::PhaseOrder,
            &project.id,
            format!(
                "phase orders [{}] are not 1..={}",
                listed.join(", "),
                orders.len()
            ),
        ));
    }
}

fn check_cage_numbers(workshop: &Workshop, out: &mut Vec<Violation>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for cage in workshop.cages() {
        *seen.entry(cage.number.as_str()).or_default() += 1;
    }
    // Report in collection order, once per number
    for cage in workshop.cages() {
        if let Some(count) = seen.remove(cage.number.as_str()) {
            if count > 1 {
                out.push(Violation::new(
                    Rule::DuplicateCage,
                    &cage.number,
                    format!("cage number used by {} cages", count),
                ));
            }
        }
    }
}

/// Check every fixture invariant, returning findings in a stable order
pub fn validate(workshop: &Workshop) -> Vec<Violation> {
    let mut violations = Vec::new();
    for project in workshop.projects() {
        check_customer(workshop, project, &mut violations);
        check_vehicle(workshop, project, &mut violations);
        check_phase_order(project, &mut violations);
    }
    check_cage_numbers(workshop, &mut violations);

    tracing::debug!(count = violations.len(), "validation finished");
    violations
}
