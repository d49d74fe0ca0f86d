use std::collections::BTreeSet;

use sample_entities::entities::{self, SmartSkidOptions};
use sample_entities::functions::{EntityDataGenerator, FunctionStep};
use sample_entities::metadata::{ColumnType, DEFAULT_TIMESTAMP_COLUMN, EntityTypeConfig};
use sample_entities::test_helpers::sample_skid;

fn skid_generator(config: &EntityTypeConfig) -> &EntityDataGenerator {
    match config.functions.steps() {
        [FunctionStep::DataGenerator(generator)] => generator,
        steps => panic!("expected a single generator step, got {}", steps.len()),
    }
}

#[test]
fn smart_skid_declares_expected_columns() {
    let config = sample_skid();

    assert_eq!(config.columns.len(), 4);
    assert!(
        config
            .columns
            .iter()
            .all(|column| column.column_type == ColumnType::Float)
    );
    let names: Vec<&str> = config.column_names().collect();
    assert_eq!(
        names,
        ["injection_rate", "lead_time", "min_supply", "tank_fill_level"]
    );

    assert_eq!(config.dimension_columns.len(), 3);
    let dimensions: Vec<&str> = config.dimension_names().collect();
    assert_eq!(dimensions, ["customer", "pipeline", "warehouse"]);
    assert!(
        config
            .dimension_columns
            .iter()
            .all(|column| column.column_type == ColumnType::String { length: 50 })
    );

    assert!(config.constants.is_empty());
    assert!(config.granularities.is_empty());
    assert_eq!(config.timestamp_column, DEFAULT_TIMESTAMP_COLUMN);
}

#[test]
fn simulation_parameters_cover_every_measurement_column() {
    let config = sample_skid();
    let generator = skid_generator(&config);

    let mean_items: BTreeSet<&str> = generator.parameters.means().into_keys().collect();
    let sd_items: BTreeSet<&str> = generator.parameters.std_devs().into_keys().collect();
    assert_eq!(mean_items, sd_items);

    let columns: BTreeSet<&str> = config.column_names().collect();
    assert_eq!(mean_items, columns);

    let fill = generator
        .parameters
        .get("tank_fill_level")
        .expect("tank_fill_level parameters");
    assert_eq!(fill.mean, 3000.0);
    assert_eq!(fill.std_dev, 1000.0);
}

#[test]
fn generator_targets_a_fixed_asset_fleet() {
    let config = sample_skid();
    let generator = skid_generator(&config);

    assert!(!generator.entity_ids.is_empty());
    assert_eq!(generator.entity_ids.len(), 6);
    assert!(generator.entity_ids.iter().all(|id| !id.is_empty()));
    assert_eq!(generator.entity_ids.iter().next(), Some("lp-12332"));
}

#[test]
fn generate_days_defaults_to_zero() {
    let config = sample_skid();
    assert_eq!(config.generate_days, 0);
    assert!(!config.drop_existing);

    let options = SmartSkidOptions {
        generate_days: 14,
        ..Default::default()
    };
    let config = entities::smart_skid("boiler_skid_01", &options);
    assert_eq!(config.generate_days, 14);
}

#[test]
fn construction_is_deterministic() {
    let options = SmartSkidOptions {
        generate_days: 7,
        db_schema: Some("iot".to_string()),
        description: Some("boiler monitoring".to_string()),
        drop_existing: true,
    };
    let first = entities::smart_skid("boiler_skid_01", &options);
    let second = entities::smart_skid("boiler_skid_01", &options);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).expect("serialize config");
    let second_json = serde_json::to_string(&second).expect("serialize config");
    assert_eq!(first_json, second_json);
}

#[test]
fn empty_entity_has_no_columns_or_functions() {
    let config = entities::empty("blank", Some("iot"), Some("empty sample"));

    assert!(config.columns.is_empty());
    assert!(config.dimension_columns.is_empty());
    assert!(config.functions.is_empty());
    assert_eq!(config.timestamp_column, DEFAULT_TIMESTAMP_COLUMN);
    assert_eq!(config.db_schema.as_deref(), Some("iot"));
    assert_eq!(config.description.as_deref(), Some("empty sample"));
}
