use crate::config::DatabaseConfig;

/// Opaque handle to the platform database an entity type is registered
/// against. Never connected or validated here; the catalog only reads the
/// default schema off it.
#[derive(Debug, Clone)]
pub struct Database {
    url: String,
    default_schema: Option<String>,
}

impl Database {
    pub fn new(cfg: &DatabaseConfig) -> Self {
        Self {
            url: cfg.url.clone(),
            default_schema: cfg.schema.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn default_schema(&self) -> Option<&str> {
        self.default_schema.as_deref()
    }
}
