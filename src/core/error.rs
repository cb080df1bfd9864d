//! Error types for the workshop data context

use miette::Diagnostic;
use thiserror::Error;

use crate::core::entity::EntityKind;
use crate::yaml::YamlError;

/// Errors surfaced by lookups, enum parsing and fixture loading
#[derive(Debug, Error, Diagnostic)]
pub enum WorkshopError {
    /// A lookup by id/number matched nothing
    #[error("no {kind} found with id '{id}'")]
    #[diagnostic(code(wsm::not_found))]
    NotFound { kind: EntityKind, id: String },

    /// A string did not name any variant of a closed enum
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    #[diagnostic(code(wsm::unknown_variant))]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },

    /// A fixture set is missing one of its files
    #[error("fixture file '{0}' is missing")]
    #[diagnostic(
        code(wsm::fixture::missing),
        help("a fixture directory needs customers.yaml, vehicles.yaml, projects.yaml, cages.yaml, team.yaml and stats.yaml")
    )]
    MissingFixture(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fixture(#[from] YamlError),

    #[error("failed to render template: {0}")]
    #[diagnostic(code(wsm::template))]
    Template(#[from] tera::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(wsm::io))]
    Io(#[from] std::io::Error),
}

impl WorkshopError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        WorkshopError::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn unknown_variant<'a>(
        kind: &'static str,
        value: &str,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        WorkshopError::UnknownVariant {
            kind,
            value: value.to_string(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
