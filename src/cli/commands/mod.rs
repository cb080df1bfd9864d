//! CLI command implementations

pub mod cage;
pub mod completions;
pub mod config;
pub mod customer;
pub mod job;
pub mod part;
pub mod project;
pub mod status;
pub mod team;
pub mod validate;
