//! The workshop data context
//!
//! A [`Workshop`] is built once from a fixture set and then only read. It is
//! passed by reference to whatever needs the data; there is no global copy.

use std::path::Path;

use crate::core::entity::{Entity, EntityKind};
use crate::core::error::WorkshopError;
use crate::core::loader::{load_fixture_set, Builtin, Directory, FixtureSet, FixtureSource};
use crate::core::query::{part_rows, task_rows, PartRow, TaskRow};
use crate::core::stats::DashboardStats;
use crate::entities::{Cage, Customer, Project, TeamMember, Vehicle};

/// Read-only collections of every workshop record
#[derive(Debug, Clone)]
pub struct Workshop {
    customers: Vec<Customer>,
    vehicles: Vec<Vehicle>,
    projects: Vec<Project>,
    cages: Vec<Cage>,
    team_members: Vec<TeamMember>,
    stats: DashboardStats,
}

fn find_by_key<'a, T: Entity>(items: &'a [T], key: &str) -> Result<&'a T, WorkshopError> {
    items.iter().find(|item| item.key() == key).ok_or_else(|| {
        tracing::debug!(kind = %T::KIND, key, "lookup missed");
        WorkshopError::not_found(T::KIND, key)
    })
}

impl Workshop {
    pub fn new(set: FixtureSet) -> Self {
        Self {
            customers: set.customers,
            vehicles: set.vehicles,
            projects: set.projects,
            cages: set.cages,
            team_members: set.team_members,
            stats: set.stats,
        }
    }

    /// The fixture set shipped inside the binary
    pub fn builtin() -> Result<Self, WorkshopError> {
        Self::from_source(&Builtin)
    }

    /// A fixture set laid out as YAML files in `dir`
    pub fn from_dir(dir: &Path) -> Result<Self, WorkshopError> {
        Self::from_source(&Directory::new(dir))
    }

    pub fn from_source(source: &dyn FixtureSource) -> Result<Self, WorkshopError> {
        load_fixture_set(source).map(Self::new)
    }

    /// `from_dir` when a directory is given, otherwise `builtin`
    pub fn load(fixtures: Option<&Path>) -> Result<Self, WorkshopError> {
        match fixtures {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    pub fn team_members(&self) -> &[TeamMember] {
        &self.team_members
    }

    /// Authored headline numbers (see [`crate::core::stats`])
    pub fn dashboard_stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn customer(&self, id: &str) -> Result<&Customer, WorkshopError> {
        find_by_key(&self.customers, id)
    }

    pub fn vehicle(&self, id: &str) -> Result<&Vehicle, WorkshopError> {
        find_by_key(&self.vehicles, id)
    }

    pub fn project(&self, id: &str) -> Result<&Project, WorkshopError> {
        find_by_key(&self.projects, id)
    }

    /// Look up a cage by its printed number (e.g. "C-012")
    pub fn cage(&self, number: &str) -> Result<&Cage, WorkshopError> {
        find_by_key(&self.cages, number)
    }

    pub fn team_member(&self, id: &str) -> Result<&TeamMember, WorkshopError> {
        find_by_key(&self.team_members, id)
    }

    pub fn projects_for_customer(&self, customer_id: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.customer_id == customer_id)
            .collect()
    }

    /// Customer projects that are in progress or on hold
    pub fn active_projects_for_customer(&self, customer_id: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.customer_id == customer_id && p.status.is_active())
            .collect()
    }

    /// Cages whose assignment names `project_id`
    pub fn cages_for_project(&self, project_id: &str) -> Vec<&Cage> {
        self.cages
            .iter()
            .filter(|c| c.assignment().map(|a| a.project_id) == Some(project_id))
            .collect()
    }

    /// The first `limit` projects in collection order
    pub fn recent_projects(&self, limit: usize) -> &[Project] {
        &self.projects[..limit.min(self.projects.len())]
    }

    pub fn task_rows(&self) -> Vec<TaskRow<'_>> {
        task_rows(&self.projects)
    }

    pub fn part_rows(&self) -> Vec<PartRow<'_>> {
        part_rows(&self.projects)
    }

    /// Record count per collection
    pub fn inventory(&self) -> Vec<(EntityKind, usize)> {
        vec![
            (EntityKind::Customer, self.customers.len()),
            (EntityKind::Vehicle, self.vehicles.len()),
            (EntityKind::Project, self.projects.len()),
            (EntityKind::Cage, self.cages.len()),
            (EntityKind::TeamMember, self.team_members.len()),
        ]
    }
}
