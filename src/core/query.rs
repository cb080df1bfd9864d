//! Filtering, flattening and counting over the fixture collections
//!
//! Every list view is a text filter AND zero or more category filters over
//! one collection. Tasks and parts are listed across projects through the
//! flattened [`TaskRow`] and [`PartRow`] views.

use serde::Serialize;
use std::str::FromStr;

use crate::core::entity::Department;
use crate::core::error::WorkshopError;
use crate::entities::{
    Cage, CageStatus, Customer, Part, PartStatus, Project, ProjectStatus, ProjectType, Role, Task,
    TaskStatus, TeamMember,
};

/// Case-insensitive substring match against a fixed set of fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            needle: query.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True if the query is empty or contained in any of `fields`
    pub fn matches<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.needle.is_empty()
            || fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<Option<String>> for TextFilter {
    fn from(query: Option<String>) -> Self {
        query.map(TextFilter::new).unwrap_or_default()
    }
}

/// Either every value (`all`) or one exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<T> {
    All,
    Only(T),
}

impl<T> Default for Category<T> {
    fn default() -> Self {
        Category::All
    }
}

impl<T: PartialEq> Category<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Category::All => true,
            Category::Only(selected) => selected == value,
        }
    }
}

impl<T: FromStr<Err = WorkshopError>> FromStr for Category<T> {
    type Err = WorkshopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Category::All)
        } else {
            s.parse().map(Category::Only)
        }
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Category<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::All => write!(f, "all"),
            Category::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Fields the text filter looks at
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.customer_name.as_str()]
    }
}

impl Searchable for Cage {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.number.as_str(),
            self.project_name.as_str(),
            self.location.as_str(),
        ]
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

impl Searchable for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// A predicate over one kind of row
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;

    /// Matching items in their original order
    fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// A task together with the project and phase it belongs to
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow<'a> {
    #[serde(flatten)]
    pub task: &'a Task,
    pub project_id: &'a str,
    pub project_name: &'a str,
    pub phase_name: &'a str,
}

impl Searchable for TaskRow<'_> {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.task.title.as_str(),
            self.project_name,
            self.task.assignee.as_str(),
        ]
    }
}

/// A part together with the project it was ordered for
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRow<'a> {
    #[serde(flatten)]
    pub part: &'a Part,
    pub project_id: &'a str,
    pub project_name: &'a str,
}

impl Searchable for PartRow<'_> {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.part.name.as_str(),
            self.part.supplier.as_str(),
            self.project_name,
        ]
    }
}

/// Every task of every project: project order, then phase order, then task order
pub fn task_rows(projects: &[Project]) -> Vec<TaskRow<'_>> {
    projects
        .iter()
        .flat_map(|project| {
            project.ordered_phases().into_iter().flat_map(move |phase| {
                phase.tasks.iter().map(move |task| TaskRow {
                    task,
                    project_id: &project.id,
                    project_name: &project.name,
                    phase_name: &phase.name,
                })
            })
        })
        .collect()
}

/// Every part of every project: project order, then part order
pub fn part_rows(projects: &[Project]) -> Vec<PartRow<'_>> {
    projects
        .iter()
        .flat_map(|project| {
            project.parts.iter().map(move |part| PartRow {
                part,
                project_id: &project.id,
                project_name: &project.name,
            })
        })
        .collect()
}

/// Count items per status, listing every status in `order` (zeros included)
pub fn count_by<T, S, F>(items: &[T], order: &[S], key: F) -> Vec<(S, usize)>
where
    S: Copy + PartialEq,
    F: Fn(&T) -> S,
{
    order
        .iter()
        .map(|status| {
            let count = items.iter().filter(|item| key(item) == *status).count();
            (*status, count)
        })
        .collect()
}

/// Split items into one column per status, keeping their relative order
pub fn group_by<'a, T, S, F>(items: &[&'a T], order: &[S], key: F) -> Vec<(S, Vec<&'a T>)>
where
    S: Copy + PartialEq,
    F: Fn(&T) -> S,
{
    order
        .iter()
        .map(|status| {
            let column = items
                .iter()
                .copied()
                .filter(|item| key(item) == *status)
                .collect();
            (*status, column)
        })
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    pub text: TextFilter,
    pub status: Category<ProjectStatus>,
    pub project_type: Category<ProjectType>,
}

impl Filter<Project> for ProjectQuery {
    fn matches(&self, project: &Project) -> bool {
        self.text.matches(project.search_fields())
            && self.status.matches(&project.status)
            && self.project_type.matches(&project.project_type)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub text: TextFilter,
    pub department: Category<Department>,
    pub status: Category<TaskStatus>,
    /// Restrict to one project id
    pub project: Option<String>,
}

impl<'r> Filter<TaskRow<'r>> for TaskQuery {
    fn matches(&self, row: &TaskRow<'r>) -> bool {
        self.text.matches(row.search_fields())
            && self.department.matches(&row.task.department)
            && self.status.matches(&row.task.status)
            && self
                .project
                .as_deref()
                .map_or(true, |id| row.project_id == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PartQuery {
    pub text: TextFilter,
    pub status: Category<PartStatus>,
}

impl<'r> Filter<PartRow<'r>> for PartQuery {
    fn matches(&self, row: &PartRow<'r>) -> bool {
        self.text.matches(row.search_fields()) && self.status.matches(&row.part.status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CageQuery {
    pub text: TextFilter,
    pub status: Category<CageStatus>,
}

impl Filter<Cage> for CageQuery {
    fn matches(&self, cage: &Cage) -> bool {
        self.text.matches(cage.search_fields()) && self.status.matches(&cage.status)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    pub text: TextFilter,
}

impl Filter<Customer> for CustomerQuery {
    fn matches(&self, customer: &Customer) -> bool {
        self.text.matches(customer.search_fields())
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamQuery {
    pub text: TextFilter,
    pub role: Category<Role>,
    pub department: Category<Department>,
}

impl Filter<TeamMember> for TeamQuery {
    fn matches(&self, member: &TeamMember) -> bool {
        self.text.matches(member.search_fields())
            && self.role.matches(&member.role)
            && self.department.matches(&member.department)
    }
}
