use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{Fixture, Group};

/// Read-only supplier of group-stage fixtures.
pub trait FixtureSource {
    fn fixtures(&self) -> Result<Vec<Fixture>>;
}

impl FixtureSource for Vec<Fixture> {
    fn fixtures(&self) -> Result<Vec<Fixture>> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone)]
pub struct JsonFixtureFile {
    path: PathBuf,
}

impl JsonFixtureFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FixtureSource for JsonFixtureFile {
    fn fixtures(&self) -> Result<Vec<Fixture>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read fixtures {}", self.path.display()))?;
        parse_fixtures_json(&raw).with_context(|| format!("parse fixtures {}", self.path.display()))
    }
}

pub fn parse_fixtures_json(raw: &str) -> Result<Vec<Fixture>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty fixtures payload"));
    }
    let mut fixtures: Vec<Fixture> =
        serde_json::from_str(trimmed).context("invalid fixtures json")?;
    fixtures.sort_by_key(|f| f.match_number);
    Ok(fixtures)
}

pub fn group_fixtures(all: &[Fixture], group: Group) -> Vec<Fixture> {
    all.iter()
        .filter(|f| f.group == Some(group))
        .cloned()
        .collect()
}

/// Group-stage fixtures keyed by group; knockout rows (no group) are dropped.
pub fn fixtures_by_group(all: &[Fixture]) -> BTreeMap<Group, Vec<Fixture>> {
    let mut out: BTreeMap<Group, Vec<Fixture>> = BTreeMap::new();
    for fixture in all {
        if let Some(group) = fixture.group {
            out.entry(group).or_default().push(fixture.clone());
        }
    }
    out
}

pub fn match_number_index(all: &[Fixture]) -> HashMap<&str, u16> {
    all.iter()
        .map(|f| (f.id.as_str(), f.match_number))
        .collect()
}
