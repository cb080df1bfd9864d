//! Project entity type, with its phases and tasks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{Department, Entity, EntityKind, Priority};
use crate::core::error::WorkshopError;
use crate::entities::part::Part;
use crate::entities::vehicle::Vehicle;

/// Kind of job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    NewBuild,
    Customization,
    Repair,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::NewBuild,
        ProjectType::Customization,
        ProjectType::Repair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::NewBuild => "new_build",
            ProjectType::Customization => "customization",
            ProjectType::Repair => "repair",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new_build" => Ok(ProjectType::NewBuild),
            "customization" => Ok(ProjectType::Customization),
            "repair" => Ok(ProjectType::Repair),
            _ => Err(WorkshopError::unknown_variant(
                "project type",
                s,
                ProjectType::ALL.iter().map(ProjectType::as_str),
            )),
        }
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Quote,
    Approved,
    InProgress,
    OnHold,
    Suspended,
    Complete,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 6] = [
        ProjectStatus::Quote,
        ProjectStatus::Approved,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Suspended,
        ProjectStatus::Complete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Quote => "quote",
            ProjectStatus::Approved => "approved",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Suspended => "suspended",
            ProjectStatus::Complete => "complete",
        }
    }

    /// Work has started and the job is not finished or suspended
    pub fn is_active(&self) -> bool {
        matches!(self, ProjectStatus::InProgress | ProjectStatus::OnHold)
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quote" => Ok(ProjectStatus::Quote),
            "approved" => Ok(ProjectStatus::Approved),
            "in_progress" => Ok(ProjectStatus::InProgress),
            "on_hold" => Ok(ProjectStatus::OnHold),
            "suspended" => Ok(ProjectStatus::Suspended),
            "complete" => Ok(ProjectStatus::Complete),
            _ => Err(WorkshopError::unknown_variant(
                "project status",
                s,
                ProjectStatus::ALL.iter().map(ProjectStatus::as_str),
            )),
        }
    }
}

/// Status shared by phases and tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Blocked,
    Complete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Blocked,
        TaskStatus::Complete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Complete => "complete",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "blocked" => Ok(TaskStatus::Blocked),
            "complete" => Ok(TaskStatus::Complete),
            _ => Err(WorkshopError::unknown_variant(
                "task status",
                s,
                TaskStatus::ALL.iter().map(TaskStatus::as_str),
            )),
        }
    }
}

/// A unit of work on a job card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub department: Department,

    /// Free-text name; not linked to the team roster
    pub assignee: String,

    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Priority,

    pub estimated_hours: f64,

    #[serde(default)]
    pub actual_hours: f64,

    pub due_date: NaiveDate,

    /// Free-text reference to whatever blocks this task (unvalidated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_by: Option<String>,
}

impl Task {
    /// Past due on `as_of` and not finished
    pub fn is_overdue(&self, as_of: NaiveDate) -> bool {
        self.status != TaskStatus::Complete && self.due_date < as_of
    }
}

/// A sequential stage of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: String,

    pub name: String,

    /// Display position, ascending from 1
    pub order: u32,

    pub status: TaskStatus,

    /// Set directly (0-100), independent of the phase's tasks
    pub progress: u8,

    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A restoration job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,

    pub name: String,

    pub customer_id: String,

    /// Copy of the customer's name for display
    pub customer_name: String,

    pub vehicle_id: String,

    /// Copy of the vehicle record for display
    pub vehicle: Vehicle,

    #[serde(rename = "type")]
    pub project_type: ProjectType,

    pub status: ProjectStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,

    /// Set directly (0-100), never recomputed from phases
    pub progress: u8,

    #[serde(default)]
    pub phases: Vec<Phase>,

    #[serde(default)]
    pub parts: Vec<Part>,

    #[serde(default)]
    pub notes: Vec<String>,

    #[serde(default)]
    pub cage_numbers: Vec<String>,

    /// Rand
    #[serde(default)]
    pub budget: f64,

    /// Rand
    #[serde(default)]
    pub spent: f64,
}

impl Project {
    /// Phases in display order; equal `order` values keep their authored order
    pub fn ordered_phases(&self) -> Vec<&Phase> {
        let mut phases: Vec<&Phase> = self.phases.iter().collect();
        phases.sort_by_key(|phase| phase.order);
        phases
    }

    /// Share of the budget spent, as a percentage. `None` when no budget is set.
    pub fn budget_used_pct(&self) -> Option<f64> {
        if self.budget > 0.0 {
            Some(self.spent / self.budget * 100.0)
        } else {
            None
        }
    }

    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.spent
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn key(&self) -> &str {
        &self.id
    }
}
