//! Entity type definitions
//!
//! The workshop tracks the following records:
//!
//! **Front office:**
//! - [`Customer`] - Clients and their contact details
//! - [`Vehicle`] - Cars brought in, owned by exactly one customer
//!
//! **Shop floor:**
//! - [`Project`] - A restoration job with its [`Phase`]s, [`Task`]s and [`Part`]s
//! - [`Cage`] - Numbered parts-storage enclosures
//! - [`TeamMember`] - Staff roster

pub mod cage;
pub mod customer;
pub mod part;
pub mod project;
pub mod team;
pub mod vehicle;

pub use cage::{Cage, CageAssignment, CageStatus};
pub use customer::Customer;
pub use part::{Part, PartStatus};
pub use project::{Phase, Project, ProjectStatus, ProjectType, Task, TaskStatus};
pub use team::{Role, TeamMember};
pub use vehicle::Vehicle;
