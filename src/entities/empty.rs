use crate::metadata::{EntityTypeBuilder, EntityTypeConfig};

/// Bare entity type with no columns and no functions; series are keyed on
/// the default `evt_timestamp` column.
pub fn empty(name: &str, db_schema: Option<&str>, description: Option<&str>) -> EntityTypeConfig {
    let mut builder = EntityTypeBuilder::new(name);
    if let Some(schema) = db_schema {
        builder = builder.db_schema(schema);
    }
    if let Some(description) = description {
        builder = builder.description(description);
    }
    builder.build()
}
