//! Herdbook notification check.
//!
//! Batch entry point: derives breeding notifications (calvings due soon,
//! cows due for insemination) for every farm and syncs them into the
//! notification store, deduplicating against unread entries. Intended to
//! run daily from a scheduler.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use herdbook::adapters::postgres::{PostgresHerdReader, PostgresNotificationStore};
use herdbook::adapters::SystemClock;
use herdbook::application::handlers::breeding::{
    SyncNotificationsCommand, SyncNotificationsHandler,
};
use herdbook::config::AppConfig;
use herdbook::ports::HerdReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,herdbook=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    let reader = Arc::new(PostgresHerdReader::new(pool.clone()));
    let store = Arc::new(PostgresNotificationStore::new(pool.clone()));
    let clock = Arc::new(SystemClock);

    let sync = SyncNotificationsHandler::new(reader.clone(), clock, store);

    let farm_ids = reader.farm_ids().await?;
    info!(farms = farm_ids.len(), "starting notification check");

    let mut total_saved = 0usize;
    let mut failures = 0usize;
    for farm_id in farm_ids {
        match sync.handle(SyncNotificationsCommand { farm_id }).await {
            Ok(result) => total_saved += result.saved,
            Err(e) => {
                // One bad farm must not stop the batch.
                failures += 1;
                error!(farm_id = %farm_id, error = %e, "notification sync failed");
            }
        }
    }

    info!(total_saved, failures, "notification check complete");
    if failures > 0 {
        return Err(format!("notification sync failed for {} farm(s)", failures).into());
    }
    Ok(())
}
