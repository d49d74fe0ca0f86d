use crate::functions::{
    EntityDataGenerator, EntityIdentifierSet, FunctionPipeline, FunctionStep, SimulationParameters,
};
use crate::metadata::{ColumnSpec, EntityTypeBuilder, EntityTypeConfig};

/// Simulated fleet the generator produces series for.
const SKID_ASSET_IDS: [&str; 6] = [
    "lp-12332",
    "lp-2334",
    "lp-20011",
    "lp-20022",
    "lp-387721",
    "lp-2277",
];

#[derive(Debug, Clone, Default)]
pub struct SmartSkidOptions {
    pub generate_days: u32,
    pub db_schema: Option<String>,
    pub description: Option<String>,
    pub drop_existing: bool,
}

/// Entity type for a simulated industrial boiler skid: four measured
/// signals, three grouping dimensions, and a generator seeded with the
/// distribution of each signal.
pub fn smart_skid(name: &str, options: &SmartSkidOptions) -> EntityTypeConfig {
    let columns = vec![
        ColumnSpec::float("injection_rate"),  // gal/day
        ColumnSpec::float("lead_time"),       // days
        ColumnSpec::float("min_supply"),      // gal
        ColumnSpec::float("tank_fill_level"), // gal
    ];

    let parameters = SimulationParameters::new()
        .with_item("injection_rate", 100.0, 50.0)
        .with_item("lead_time", 3.0, 2.0)
        .with_item("min_supply", 600.0, 300.0)
        .with_item("tank_fill_level", 3000.0, 1000.0);

    let generator = EntityDataGenerator::new(EntityIdentifierSet::new(SKID_ASSET_IDS), parameters);
    let functions = FunctionPipeline::new().with_step(FunctionStep::DataGenerator(generator));

    let dimension_columns = vec![
        ColumnSpec::string("customer", 50),
        ColumnSpec::string("pipeline", 50),
        ColumnSpec::string("warehouse", 50),
    ];

    let mut builder = EntityTypeBuilder::new(name)
        .columns(columns)
        .dimension_columns(dimension_columns)
        .functions(functions)
        .generate_days(options.generate_days)
        .drop_existing(options.drop_existing);
    if let Some(schema) = &options.db_schema {
        builder = builder.db_schema(schema);
    }
    if let Some(description) = &options.description {
        builder = builder.description(description);
    }
    builder.build()
}
