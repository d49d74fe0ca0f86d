use sample_entities::{
    catalog::EntityTypeCatalog,
    config::AppConfig,
    db::Database,
    entities::{self, SmartSkidOptions},
    logging::init_tracing,
};

fn main() {
    if let Err(err) = run() {
        tracing::error!("entity registration failed: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().expect("failed to load config");
    init_tracing(&cfg.log_level);

    let db = Database::new(&cfg.database);
    tracing::info!("registering entity types against {}", db.url());

    let options = SmartSkidOptions {
        generate_days: cfg.generate_days,
        ..Default::default()
    };
    let config = entities::smart_skid(&cfg.entity_name, &options);

    let mut catalog = EntityTypeCatalog::new();
    catalog.register(&db, config)?;

    let registered = catalog
        .get(&cfg.entity_name)
        .ok_or_else(|| anyhow::anyhow!("entity type missing after registration"))?;
    tracing::info!(
        "{} columns, {} dimensions, {} pipeline step(s)",
        registered.config.columns.len(),
        registered.config.dimension_columns.len(),
        registered.config.functions.len(),
    );
    println!("{}", serde_json::to_string_pretty(registered)?);
    Ok(())
}
