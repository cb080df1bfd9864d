//! WSM: workshop manager
//!
//! Read-only views over the project, parts, storage-cage, customer and staff
//! records of a classic-car restoration workshop.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
