//! Lookup tables that drive a generator run.
//!
//! Everything the enrichment pass needs to know about names, flags and
//! models lives here as plain data so that tests can swap it out.

use formats::ModelKind;

use crate::orbit::{DEFAULT_ORBITS, OrbitSpec};
use crate::palette::GLASBEY_LIGHT;

/// Ordered display-name → country-code table. Position `i` names input trip `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameTable {
    entries: Vec<(String, String)>,
}

impl NameTable {
    pub fn new<N, F>(entries: impl IntoIterator<Item = (N, F)>) -> Self
    where
        N: Into<String>,
        F: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(n, f)| (n.into(), f.into()))
                .collect(),
        }
    }

    pub fn countries() -> Self {
        Self::new([
            ("China", "cn"),
            ("Australia", "au"),
            ("United States", "us"),
            ("New Zealand", "nz"),
            ("UK", "gb"),
            ("Canada", "ca"),
            ("Russia", "ru"),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in table order; position `i` names input trip `i`.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn flag_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.as_str())
    }
}

/// Condition on a trip's position in the input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IndexMatch {
    Exactly(usize),
    Above(usize),
}

impl IndexMatch {
    pub fn matches(&self, index: usize) -> bool {
        match *self {
            IndexMatch::Exactly(i) => index == i,
            IndexMatch::Above(i) => index > i,
        }
    }
}

/// Positional model selection. Conditions are tried in order; the first hit
/// wins, otherwise `fallback`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRule {
    pub conditions: Vec<(IndexMatch, ModelKind)>,
    pub fallback: ModelKind,
}

impl ModelRule {
    pub fn select(&self, index: usize) -> ModelKind {
        self.conditions
            .iter()
            .find(|(cond, _)| cond.matches(index))
            .map(|(_, model)| *model)
            .unwrap_or(self.fallback)
    }
}

impl Default for ModelRule {
    fn default() -> Self {
        // Index 4 must stay ahead of the range condition.
        Self {
            conditions: vec![
                (IndexMatch::Exactly(4), ModelKind::Duck),
                (IndexMatch::Above(1), ModelKind::Truck),
                (IndexMatch::Above(0), ModelKind::CesiumMan),
            ],
            fallback: ModelKind::Box,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig<'a> {
    pub names: NameTable,
    pub models: ModelRule,
    pub orbits: Vec<OrbitSpec>,
    pub palette: &'a [[f64; 3]],
}

impl Default for GeneratorConfig<'_> {
    fn default() -> Self {
        Self {
            names: NameTable::countries(),
            models: ModelRule::default(),
            orbits: DEFAULT_ORBITS.to_vec(),
            palette: &GLASBEY_LIGHT,
        }
    }
}
