//! Pipeline steps an entity type carries. The only step implemented is the
//! synthetic-data generator configuration; the generation itself runs in the
//! analytics platform, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normal-distribution parameters for one simulated data item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalDistribution {
    pub mean: f64,
    pub std_dev: f64,
}

/// Per-item simulation settings, keyed by data-item name. Iteration order is
/// the item name order, so two configurations built from the same inputs
/// compare and serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimulationParameters {
    items: BTreeMap<String, SignalDistribution>,
}

impl SimulationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, name: impl Into<String>, mean: f64, std_dev: f64) -> Self {
        self.insert(name, mean, std_dev);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, mean: f64, std_dev: f64) {
        self.items
            .insert(name.into(), SignalDistribution { mean, std_dev });
    }

    pub fn get(&self, name: &str) -> Option<SignalDistribution> {
        self.items.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Mean per data item, the shape the generator contract consumes.
    pub fn means(&self) -> BTreeMap<&str, f64> {
        self.items
            .iter()
            .map(|(name, dist)| (name.as_str(), dist.mean))
            .collect()
    }

    /// Standard deviation per data item.
    pub fn std_devs(&self) -> BTreeMap<&str, f64> {
        self.items
            .iter()
            .map(|(name, dist)| (name.as_str(), dist.std_dev))
            .collect()
    }
}

/// Ordered list of simulated asset identifiers the generator produces
/// series for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EntityIdentifierSet(Vec<String>);

impl EntityIdentifierSet {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Configuration of the platform's synthetic time-series generator: which
/// assets to simulate and the distribution of each data item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDataGenerator {
    pub entity_ids: EntityIdentifierSet,
    pub parameters: SimulationParameters,
}

impl EntityDataGenerator {
    pub fn new(entity_ids: EntityIdentifierSet, parameters: SimulationParameters) -> Self {
        Self {
            entity_ids,
            parameters,
        }
    }
}

/// One step of an entity type's function pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionStep {
    DataGenerator(EntityDataGenerator),
}

/// Ordered transform/generator steps applied to produce an entity type's
/// derived data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FunctionPipeline {
    steps: Vec<FunctionStep>,
}

impl FunctionPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(mut self, step: FunctionStep) -> Self {
        self.push(step);
        self
    }

    pub fn push(&mut self, step: FunctionStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[FunctionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl From<Vec<FunctionStep>> for FunctionPipeline {
    fn from(steps: Vec<FunctionStep>) -> Self {
        Self { steps }
    }
}
