//! Script to seed a user's lead collection from the command line.

use dotenvy::dotenv;
use rust_leaddb_api::db::Database;
use rust_leaddb_api::service::{LeadDatabaseService, SeedProfile};
use rust_leaddb_api::store::PgLeadStore;
use std::env;
use std::sync::Arc;

/// Main entry point for the seeding script.
///
/// Connects to the database and runs the one-time initialization for the user
/// given as the first argument. Re-running for an already-seeded user is a
/// no-op.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let user_id = env::args()
        .nth(1)
        .ok_or("usage: seed_leads <user_id>")?;

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::new(&database_url).await?;

    tracing::info!("Connected to database. Seeding leads for user {}...", user_id);

    let store = Arc::new(PgLeadStore::new(db.pool.clone()));
    let service = LeadDatabaseService::with_profile(store, SeedProfile::default());
    service.initialize_database(&user_id).await?;

    tracing::info!("Seeding complete for user {}", user_id);

    Ok(())
}
