//! Core module - the workshop data context and the operations over it

pub mod cage_label;
pub mod config;
pub mod entity;
pub mod error;
pub mod labels;
pub mod loader;
pub mod query;
pub mod stats;
pub mod store;
pub mod validation;

pub use cage_label::{CageLabel, LabelRenderer};
pub use config::Config;
pub use entity::{Department, Entity, EntityKind, Priority};
pub use error::WorkshopError;
pub use labels::{status_color, ColorToken};
pub use loader::{Builtin, Directory, FixtureSet, FixtureSource};
pub use query::{Category, Filter, PartRow, TaskRow, TextFilter};
pub use stats::{DashboardStats, DerivedStats, StatsDrift};
pub use store::Workshop;
pub use validation::{validate, Rule, Violation};
