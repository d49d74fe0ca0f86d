use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::db::Database;
use crate::error::{CatalogError, CatalogResult};
use crate::metadata::EntityTypeConfig;

/// A registered entity type. The schema is resolved at registration time:
/// the config's own schema wins, the database default fills the gap.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredEntityType {
    pub id: Uuid,
    pub registered_at: DateTime<FixedOffset>,
    pub schema: Option<String>,
    pub config: EntityTypeConfig,
}

/// In-memory registry of entity types, keyed by name.
#[derive(Debug, Default)]
pub struct EntityTypeCatalog {
    entries: BTreeMap<String, RegisteredEntityType>,
}

impl EntityTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `config` against `db`. A name collision is an error unless
    /// the config carries `drop_existing`, in which case the previous
    /// registration is replaced.
    pub fn register(&mut self, db: &Database, config: EntityTypeConfig) -> CatalogResult<Uuid> {
        let name = config.name.clone();
        let schema = config
            .db_schema
            .clone()
            .or_else(|| db.default_schema().map(str::to_owned));
        let entry = RegisteredEntityType {
            id: Uuid::new_v4(),
            registered_at: Utc::now().fixed_offset(),
            schema,
            config,
        };
        let id = entry.id;

        match self.entries.entry(name.clone()) {
            Entry::Occupied(mut slot) => {
                if !entry.config.drop_existing {
                    return Err(CatalogError::AlreadyRegistered { name });
                }
                info!("replacing existing entity type {name}");
                slot.insert(entry);
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }
        info!("registered entity type {name} ({id})");
        Ok(id)
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredEntityType> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &RegisteredEntityType> {
        self.entries.values()
    }
}
