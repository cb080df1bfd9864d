//! Fixture loading
//!
//! A fixture set is six YAML files. They come either from the copy embedded
//! in the binary or from a directory on disk; [`FixtureSource`] hides which.

use rust_embed::Embed;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::error::WorkshopError;
use crate::core::stats::DashboardStats;
use crate::entities::{Cage, Customer, Project, TeamMember, Vehicle};

pub const CUSTOMERS_FILE: &str = "customers.yaml";
pub const VEHICLES_FILE: &str = "vehicles.yaml";
pub const PROJECTS_FILE: &str = "projects.yaml";
pub const CAGES_FILE: &str = "cages.yaml";
pub const TEAM_FILE: &str = "team.yaml";
pub const STATS_FILE: &str = "stats.yaml";

pub const FIXTURE_FILES: [&str; 6] = [
    CUSTOMERS_FILE,
    VEHICLES_FILE,
    PROJECTS_FILE,
    CAGES_FILE,
    TEAM_FILE,
    STATS_FILE,
];

#[derive(Embed)]
#[folder = "fixtures/"]
struct EmbeddedFixtures;

/// Where fixture files are read from
pub trait FixtureSource {
    /// Human-readable origin, used in logs and error messages
    fn describe(&self) -> String;

    /// Contents of `name`, or `None` if the set has no such file
    fn read(&self, name: &str) -> Result<Option<String>, WorkshopError>;
}

/// The fixture set compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct Builtin;

impl FixtureSource for Builtin {
    fn describe(&self) -> String {
        "built-in fixtures".to_string()
    }

    fn read(&self, name: &str) -> Result<Option<String>, WorkshopError> {
        Ok(EmbeddedFixtures::get(name)
            .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned()))
    }
}

/// A fixture set on disk
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate `name` in the root, else one level below it
    fn find(&self, name: &str) -> Option<PathBuf> {
        let direct = self.root.join(name);
        if direct.is_file() {
            return Some(direct);
        }
        WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .find(|e| e.file_name().to_str() == Some(name))
            .map(|e| e.into_path())
    }
}

impl FixtureSource for Directory {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn read(&self, name: &str) -> Result<Option<String>, WorkshopError> {
        match self.find(name) {
            Some(path) => Ok(Some(std::fs::read_to_string(path)?)),
            None => Ok(None),
        }
    }
}

/// Every collection of a fixture set, before it is frozen into a `Workshop`
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub customers: Vec<Customer>,
    pub vehicles: Vec<Vehicle>,
    pub projects: Vec<Project>,
    pub cages: Vec<Cage>,
    pub team_members: Vec<TeamMember>,
    pub stats: DashboardStats,
}

fn load_file<T: DeserializeOwned>(
    source: &dyn FixtureSource,
    name: &str,
) -> Result<T, WorkshopError> {
    let content = source
        .read(name)?
        .ok_or_else(|| WorkshopError::MissingFixture(name.to_string()))?;
    let parsed = crate::yaml::parse_yaml_str(&content, name)?;
    Ok(parsed)
}

/// Read and parse all six files of a fixture set
pub fn load_fixture_set(source: &dyn FixtureSource) -> Result<FixtureSet, WorkshopError> {
    tracing::debug!(source = %source.describe(), "loading fixtures");

    let set = FixtureSet {
        customers: load_file(source, CUSTOMERS_FILE)?,
        vehicles: load_file(source, VEHICLES_FILE)?,
        projects: load_file(source, PROJECTS_FILE)?,
        cages: load_file(source, CAGES_FILE)?,
        team_members: load_file(source, TEAM_FILE)?,
        stats: load_file(source, STATS_FILE)?,
    };

    tracing::debug!(
        customers = set.customers.len(),
        vehicles = set.vehicles.len(),
        projects = set.projects.len(),
        cages = set.cages.len(),
        team_members = set.team_members.len(),
        "fixtures loaded"
    );

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_has_every_fixture_file() {
        for name in FIXTURE_FILES {
            assert!(Builtin.read(name).unwrap().is_some(), "missing {}", name);
        }
        assert!(Builtin.read("nope.yaml").unwrap().is_none());
    }

    #[test]
    fn test_load_builtin_fixture_set() {
        let set = load_fixture_set(&Builtin).unwrap();
        assert_eq!(set.customers.len(), 5);
        assert_eq!(set.vehicles.len(), 5);
        assert_eq!(set.projects.len(), 6);
        assert_eq!(set.cages.len(), 14);
        assert_eq!(set.team_members.len(), 7);
    }

    #[test]
    fn test_directory_missing_file_is_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CUSTOMERS_FILE), "[]").unwrap();

        let err = load_fixture_set(&Directory::new(dir.path())).unwrap_err();
        assert!(matches!(err, WorkshopError::MissingFixture(ref name) if name == VEHICLES_FILE));
    }

    #[test]
    fn test_directory_finds_nested_files() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(TEAM_FILE), "[]").unwrap();

        let source = Directory::new(dir.path());
        assert_eq!(source.read(TEAM_FILE).unwrap().as_deref(), Some("[]"));
        assert!(source.read(CAGES_FILE).unwrap().is_none());
    }

    #[test]
    fn test_directory_root_file_wins_over_nested_copy() {
        let dir = tempdir().unwrap();
        let archive = dir.path().join("archive");
        fs::create_dir_all(&archive).unwrap();
        fs::write(archive.join(TEAM_FILE), "stale").unwrap();
        fs::write(dir.path().join(TEAM_FILE), "root").unwrap();

        let source = Directory::new(dir.path());
        assert_eq!(source.read(TEAM_FILE).unwrap().as_deref(), Some("root"));
    }

    #[test]
    fn test_malformed_file_is_a_fixture_error() {
        let dir = tempdir().unwrap();
        for name in FIXTURE_FILES {
            let body = if name == STATS_FILE {
                "totalProjects: 1\nactiveProjects: 1\ncompletedThisMonth: 0\nonHold: 0\npartsInTransit: 0\noverdueTaskCount: 0\ntotalCages: 0\nactiveCages: 0\n"
            } else {
                "[]"
            };
            fs::write(dir.path().join(name), body).unwrap();
        }
        fs::write(
            dir.path().join(CAGES_FILE),
            "- id: cage-1\n  number: C-1\n  location: Row A\n  status: flooded\n",
        )
        .unwrap();

        let err = load_fixture_set(&Directory::new(dir.path())).unwrap_err();
        assert!(matches!(err, WorkshopError::Fixture(_)));
    }
}
