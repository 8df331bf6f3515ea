use anyhow::Context;
use clap::Parser;

use cli::{Cli, Commands};
use promo_console::catalog::normalize;
use promo_console::{
    Config, PromotionRepository, RedbStore, WizardSession, hydrate, init_logger_with_file, publish,
};
use shared::models::WizardState;

mod cli;

fn main() -> anyhow::Result<()> {
    // 1. 环境 (.env) 与日志
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let args = Cli::parse();

    if let Err(e) = run(&config, args.command) {
        tracing::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(config: &Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Draft => {
            println!("{}", serde_json::to_string_pretty(&WizardState::default())?);
        }
        Commands::List { status } => {
            let repository = open_repository(config)?;
            let records = if config.seed_demo {
                repository.list_or_seed()?
            } else {
                repository.list()
            };
            let records = status.apply(records.into_iter().map(normalize).collect());
            for p in &records {
                println!(
                    "{:<16} {:<32} {:<14} {:<8} {:>6}  {}",
                    p.id.to_string(),
                    p.name,
                    p.promotion_type,
                    p.status,
                    p.claim_count(),
                    p.period.as_deref().unwrap_or_default()
                );
            }
            tracing::debug!(count = records.len(), "Listed promotions");
        }
        Commands::Show { id } => {
            let repository = open_repository(config)?;
            let found = repository.find(&id);
            match hydrate(found.as_ref(), &id) {
                Some(view) => println!("{}", serde_json::to_string_pretty(&view)?),
                None => println!("No promotion found for id {id}"),
            }
        }
        Commands::Publish { draft } => {
            let repository = open_repository(config)?;
            let mut session = WizardSession::new();
            if let Some(path) = draft {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading draft {}", path.display()))?;
                let state: WizardState = serde_json::from_str(&raw)
                    .with_context(|| format!("parsing draft {}", path.display()))?;
                session.load_promotion(state);
            }
            let record = publish(&session, &repository)?;
            println!("Published {} ({})", record.name, record.id);
        }
    }
    Ok(())
}

fn open_repository(config: &Config) -> anyhow::Result<PromotionRepository<RedbStore>> {
    let path = config.db_path();
    let store = RedbStore::open(&path)
        .with_context(|| format!("opening promotion database {}", path.display()))?;
    Ok(PromotionRepository::new(store))
}
