//! Enum-to-presentation mappings
//!
//! One table per enum. The typed functions are total over their enum; the
//! `*_str` variants parse first and report out-of-domain input as
//! [`WorkshopError::UnknownVariant`]. [`status_color`] is the only mapping with
//! a fallback: any string it does not recognise gets [`ColorToken::Gray`].

use console::Style;

use crate::core::entity::Department;
use crate::core::error::WorkshopError;
use crate::entities::{ProjectStatus, ProjectType};

/// Display color assigned to a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Gray,
    Blue,
    Amber,
    Orange,
    Red,
    Green,
    Purple,
    Emerald,
}

impl ColorToken {
    /// Badge classes used by the web dashboard
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorToken::Gray => "bg-gray-100 text-gray-700",
            ColorToken::Blue => "bg-blue-100 text-blue-700",
            ColorToken::Amber => "bg-amber-100 text-amber-700",
            ColorToken::Orange => "bg-orange-100 text-orange-700",
            ColorToken::Red => "bg-red-100 text-red-700",
            ColorToken::Green => "bg-green-100 text-green-700",
            ColorToken::Purple => "bg-purple-100 text-purple-700",
            ColorToken::Emerald => "bg-emerald-100 text-emerald-700",
        }
    }

    /// Closest terminal style
    pub fn style(&self) -> Style {
        match self {
            ColorToken::Gray => Style::new().dim(),
            ColorToken::Blue => Style::new().blue(),
            ColorToken::Amber => Style::new().yellow(),
            ColorToken::Orange => Style::new().color256(208),
            ColorToken::Red => Style::new().red(),
            ColorToken::Green => Style::new().green(),
            ColorToken::Purple => Style::new().magenta(),
            ColorToken::Emerald => Style::new().green().bold(),
        }
    }
}

/// Color for any project, task or part status string
pub fn status_color(status: &str) -> ColorToken {
    match status {
        "quote" | "pending" | "quoted" => ColorToken::Gray,
        "approved" | "ordered" => ColorToken::Blue,
        "in_progress" => ColorToken::Amber,
        "on_hold" => ColorToken::Orange,
        "suspended" | "blocked" => ColorToken::Red,
        "complete" | "received" => ColorToken::Green,
        "in_transit" => ColorToken::Purple,
        "installed" => ColorToken::Emerald,
        _ => ColorToken::Gray,
    }
}

pub fn project_type_label(project_type: ProjectType) -> &'static str {
    match project_type {
        ProjectType::NewBuild => "New Build",
        ProjectType::Customization => "Customization",
        ProjectType::Repair => "Repair",
    }
}

pub fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Quote => "Quote",
        ProjectStatus::Approved => "Approved",
        ProjectStatus::InProgress => "In Progress",
        ProjectStatus::OnHold => "On Hold",
        ProjectStatus::Suspended => "Suspended",
        ProjectStatus::Complete => "Complete",
    }
}

pub fn department_label(department: Department) -> &'static str {
    match department {
        Department::Body => "Body Shop",
        Department::Wiring => "Electrical",
        Department::Interior => "Interior",
        Department::Engineering => "Engineering",
        Department::Paint => "Paint",
    }
}

pub fn project_type_label_str(project_type: &str) -> Result<&'static str, WorkshopError> {
    Ok(project_type_label(project_type.parse()?))
}

pub fn status_label_str(status: &str) -> Result<&'static str, WorkshopError> {
    Ok(status_label(status.parse()?))
}

pub fn department_label_str(department: &str) -> Result<&'static str, WorkshopError> {
    Ok(department_label(department.parse()?))
}

/// "pending_pickup" -> "pending pickup"
pub fn humanize(value: &str) -> String {
    value.replace('_', " ")
}
