use sample_entities::catalog::EntityTypeCatalog;
use sample_entities::entities::{self, SmartSkidOptions};
use sample_entities::error::CatalogError;
use sample_entities::test_helpers::{sample_skid, test_database};

#[test]
fn register_then_lookup() {
    let db = test_database();
    let mut catalog = EntityTypeCatalog::new();

    let id = catalog
        .register(&db, sample_skid())
        .expect("register smart skid");

    let registered = catalog.get("boiler_skid_01").expect("registered entry");
    assert_eq!(registered.id, id);
    assert_eq!(registered.config.name, "boiler_skid_01");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains("boiler_skid_01"));
    assert!(!catalog.contains("other_skid"));
}

#[test]
fn duplicate_registration_is_rejected() {
    let db = test_database();
    let mut catalog = EntityTypeCatalog::new();

    catalog
        .register(&db, sample_skid())
        .expect("first registration");
    let err = catalog
        .register(&db, sample_skid())
        .expect_err("second registration must fail");

    match err {
        CatalogError::AlreadyRegistered { name } => assert_eq!(name, "boiler_skid_01"),
    }
    assert_eq!(catalog.len(), 1);
}

#[test]
fn drop_existing_replaces_previous_registration() {
    let db = test_database();
    let mut catalog = EntityTypeCatalog::new();

    let first_id = catalog
        .register(&db, sample_skid())
        .expect("first registration");

    let options = SmartSkidOptions {
        description: Some("rebuilt".to_string()),
        drop_existing: true,
        ..Default::default()
    };
    let replacement = entities::smart_skid("boiler_skid_01", &options);
    let second_id = catalog
        .register(&db, replacement)
        .expect("replacement registration");

    assert_ne!(first_id, second_id);
    assert_eq!(catalog.len(), 1);
    let registered = catalog.get("boiler_skid_01").expect("registered entry");
    assert_eq!(registered.id, second_id);
    assert_eq!(registered.config.description.as_deref(), Some("rebuilt"));
}

#[test]
fn schema_falls_back_to_database_default() {
    let db = test_database();
    let mut catalog = EntityTypeCatalog::new();

    catalog
        .register(&db, sample_skid())
        .expect("register without explicit schema");
    let registered = catalog.get("boiler_skid_01").expect("registered entry");
    assert_eq!(registered.schema.as_deref(), Some("iot"));

    let options = SmartSkidOptions {
        db_schema: Some("custom".to_string()),
        ..Default::default()
    };
    let config = entities::smart_skid("schema_skid", &options);
    catalog
        .register(&db, config)
        .expect("register with explicit schema");
    let registered = catalog.get("schema_skid").expect("registered entry");
    assert_eq!(registered.schema.as_deref(), Some("custom"));
}
