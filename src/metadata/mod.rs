mod column;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use column::{ColumnSpec, ColumnType};

use crate::functions::FunctionPipeline;

/// Column every entity type keys its time series on unless overridden.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "evt_timestamp";

/// Named value attached to an entity type and shared by all its instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    pub value: serde_json::Value,
}

/// Aggregation level (e.g. hourly, daily) an entity type can be rolled up to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Granularity {
    pub name: String,
    pub frequency: String,
}

/// Complete declarative description of one entity type: its schema, the
/// pipeline that produces derived data for it, and the directives forwarded
/// to the registration layer. Built once via [`EntityTypeBuilder`] and not
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTypeConfig {
    pub name: String,
    pub timestamp_column: String,
    pub db_schema: Option<String>,
    pub description: Option<String>,
    pub columns: Vec<ColumnSpec>,
    pub dimension_columns: Vec<ColumnSpec>,
    pub constants: Vec<Constant>,
    pub granularities: Vec<Granularity>,
    pub functions: FunctionPipeline,
    pub generate_days: u32,
    pub drop_existing: bool,
    pub output_metadata: BTreeMap<String, serde_json::Value>,
}

impl EntityTypeConfig {
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn dimension_names(&self) -> impl Iterator<Item = &str> {
        self.dimension_columns
            .iter()
            .map(|column| column.name.as_str())
    }
}

/// Assembles an [`EntityTypeConfig`] from chained setters. `build` performs
/// no validation; whatever was set is forwarded unchanged and the
/// registration layer applies its own rules.
#[derive(Debug, Clone)]
pub struct EntityTypeBuilder {
    config: EntityTypeConfig,
}

impl EntityTypeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: EntityTypeConfig {
                name: name.into(),
                timestamp_column: DEFAULT_TIMESTAMP_COLUMN.to_string(),
                db_schema: None,
                description: None,
                columns: Vec::new(),
                dimension_columns: Vec::new(),
                constants: Vec::new(),
                granularities: Vec::new(),
                functions: FunctionPipeline::new(),
                generate_days: 0,
                drop_existing: false,
                output_metadata: BTreeMap::new(),
            },
        }
    }

    pub fn timestamp_column(mut self, name: impl Into<String>) -> Self {
        self.config.timestamp_column = name.into();
        self
    }

    pub fn db_schema(mut self, schema: impl Into<String>) -> Self {
        self.config.db_schema = Some(schema.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    pub fn columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.config.columns = columns;
        self
    }

    pub fn dimension_columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.config.dimension_columns = columns;
        self
    }

    pub fn constants(mut self, constants: Vec<Constant>) -> Self {
        self.config.constants = constants;
        self
    }

    pub fn granularities(mut self, granularities: Vec<Granularity>) -> Self {
        self.config.granularities = granularities;
        self
    }

    pub fn functions(mut self, functions: FunctionPipeline) -> Self {
        self.config.functions = functions;
        self
    }

    pub fn generate_days(mut self, days: u32) -> Self {
        self.config.generate_days = days;
        self
    }

    pub fn drop_existing(mut self, drop_existing: bool) -> Self {
        self.config.drop_existing = drop_existing;
        self
    }

    pub fn output_metadata(mut self, metadata: BTreeMap<String, serde_json::Value>) -> Self {
        self.config.output_metadata = metadata;
        self
    }

    pub fn build(self) -> EntityTypeConfig {
        self.config
    }
}
