//! Dashboard statistics
//!
//! [`DashboardStats`] is authored alongside the fixtures and is shown as-is;
//! it is not expected to agree with the collections. [`DerivedStats`] counts
//! the live collections, and [`StatsDrift`] lists where the two differ.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::query::count_by;
use crate::core::store::Workshop;
use crate::entities::{CageStatus, PartStatus, ProjectStatus};

/// Headline numbers for the dashboard, as authored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: u32,
    pub active_projects: u32,
    pub completed_this_month: u32,
    pub on_hold: u32,
    pub parts_in_transit: u32,
    pub overdue_task_count: u32,
    pub total_cages: u32,
    pub active_cages: u32,
}

/// The same headline numbers counted from the collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub as_of: NaiveDate,
    pub total_projects: u32,
    /// In progress or on hold
    pub active_projects: u32,
    /// Projects with status complete; fixtures carry no completion date
    pub completed: u32,
    pub on_hold: u32,
    pub parts_in_transit: u32,
    /// Tasks due before `as_of` that are not complete
    pub overdue_task_count: u32,
    pub total_cages: u32,
    pub active_cages: u32,
    pub projects_by_status: Vec<(ProjectStatus, usize)>,
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl DerivedStats {
    pub fn compute(workshop: &Workshop, as_of: NaiveDate) -> Self {
        let projects = workshop.projects();
        let cages = workshop.cages();

        let by_status = count_by(projects, &ProjectStatus::ALL, |p| p.status);
        let status_count = |status: ProjectStatus| {
            by_status
                .iter()
                .find(|(s, _)| *s == status)
                .map_or(0, |(_, n)| *n)
        };

        let parts_in_transit = workshop
            .part_rows()
            .iter()
            .filter(|row| row.part.status == PartStatus::InTransit)
            .count();
        let overdue = workshop
            .task_rows()
            .iter()
            .filter(|row| row.task.is_overdue(as_of))
            .count();

        Self {
            as_of,
            total_projects: count(projects.len()),
            active_projects: count(projects.iter().filter(|p| p.status.is_active()).count()),
            completed: count(status_count(ProjectStatus::Complete)),
            on_hold: count(status_count(ProjectStatus::OnHold)),
            parts_in_transit: count(parts_in_transit),
            overdue_task_count: count(overdue),
            total_cages: count(cages.len()),
            active_cages: count(
                cages
                    .iter()
                    .filter(|c| c.status == CageStatus::Active)
                    .count(),
            ),
            projects_by_status: by_status,
        }
    }
}

/// One headline number where authored and derived values disagree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsDrift {
    pub field: &'static str,
    pub authored: u32,
    pub derived: u32,
}

impl DashboardStats {
    /// Fields whose authored value differs from the derived one
    pub fn drift(&self, derived: &DerivedStats) -> Vec<StatsDrift> {
        [
            ("totalProjects", self.total_projects, derived.total_projects),
            ("activeProjects", self.active_projects, derived.active_projects),
            ("completedThisMonth", self.completed_this_month, derived.completed),
            ("onHold", self.on_hold, derived.on_hold),
            ("partsInTransit", self.parts_in_transit, derived.parts_in_transit),
            ("overdueTaskCount", self.overdue_task_count, derived.overdue_task_count),
            ("totalCages", self.total_cages, derived.total_cages),
            ("activeCages", self.active_cages, derived.active_cages),
        ]
        .into_iter()
        .filter(|(_, authored, derived)| authored != derived)
        .map(|(field, authored, derived)| StatsDrift {
            field,
            authored,
            derived,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Workshop {
        Workshop::builtin().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_authored_stats_are_kept_verbatim() {
        let stats = builtin().dashboard_stats();
        assert_eq!(stats.total_projects, 85);
        assert_eq!(stats.active_projects, 42);
        assert_eq!(stats.completed_this_month, 3);
        assert_eq!(stats.on_hold, 8);
        assert_eq!(stats.parts_in_transit, 127);
        assert_eq!(stats.overdue_task_count, 12);
        assert_eq!(stats.total_cages, 156);
        assert_eq!(stats.active_cages, 134);
    }

    #[test]
    fn test_derived_stats_count_the_collections() {
        let workshop = builtin();
        let derived = DerivedStats::compute(&workshop, date(2024, 5, 2));
        assert_eq!(derived.total_projects, 6);
        assert_eq!(derived.active_projects, 5);
        assert_eq!(derived.completed, 0);
        assert_eq!(derived.on_hold, 1);
        assert_eq!(derived.parts_in_transit, 2);
        // t-005 (due 2024-05-01, in progress) is the only unfinished task due before May 2nd
        assert_eq!(derived.overdue_task_count, 1);
        assert_eq!(derived.total_cages, 14);
        assert_eq!(derived.active_cages, 12);
    }

    #[test]
    fn test_drift_reports_every_inconsistent_field() {
        let workshop = builtin();
        let derived = DerivedStats::compute(&workshop, date(2024, 5, 2));
        let drift = workshop.dashboard_stats().drift(&derived);
        let fields: Vec<&str> = drift.iter().map(|d| d.field).collect();
        assert_eq!(
            fields,
            vec![
                "totalProjects",
                "activeProjects",
                "completedThisMonth",
                "onHold",
                "partsInTransit",
                "overdueTaskCount",
                "totalCages",
                "activeCages",
            ]
        );
        assert_eq!(drift[0].authored, 85);
        assert_eq!(drift[0].derived, 6);
    }

    #[test]
    fn test_no_drift_when_stats_match() {
        let workshop = builtin();
        let derived = DerivedStats::compute(&workshop, date(2024, 1, 1));
        let matching = DashboardStats {
            total_projects: derived.total_projects,
            active_projects: derived.active_projects,
            completed_this_month: derived.completed,
            on_hold: derived.on_hold,
            parts_in_transit: derived.parts_in_transit,
            overdue_task_count: derived.overdue_task_count,
            total_cages: derived.total_cages,
            active_cages: derived.active_cages,
        };
        assert!(matching.drift(&derived).is_empty());
    }
}
