use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::entities::{self, SmartSkidOptions};
use crate::metadata::EntityTypeConfig;

pub fn test_database() -> Database {
    Database::new(&DatabaseConfig {
        url: "postgres://localhost/iot_test".to_string(),
        schema: Some("iot".to_string()),
    })
}

pub fn sample_skid() -> EntityTypeConfig {
    entities::smart_skid("boiler_skid_01", &SmartSkidOptions::default())
}
