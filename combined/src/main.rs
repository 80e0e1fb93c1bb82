//! shop-api binary - serves the HTTP API and manages the schema.
//!
//! All services run in-process against one shared database pool.

use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppConfig;
use gateway_lib::AppState;
use store::Database;

#[derive(Parser)]
#[command(name = "shop-api")]
#[command(author, version, about = "Shop backend: users, products and purchases")]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (default 0.0.0.0)
        #[arg(short = 'H', long, env = "SERVER_HOST")]
        host: Option<String>,
        /// Port to listen on (default 3333, SERVER_PORT also accepted)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve { host, port } => serve(host, port).await,
        Commands::Migrate { action } => migrate(action).await,
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,tower_http=debug".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(host: Option<String>, port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    info!("Starting shop-api");

    let database = Database::connect(&config.database).await?;
    let state = AppState::from_database(database.clone(), config.jwt);

    let served = gateway_lib::run(state, &config.server.addr()).await;

    if let Err(e) = database.close().await {
        warn!("Failed to close database cleanly: {}", e);
    }

    served
}

async fn migrate(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Connect without auto-running migrations for manual control
    let database = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            info!("Running pending migrations...");
            database.run_migrations().await?;
            info!("Migrations completed successfully");
        }
        MigrateAction::Down => {
            info!("Rolling back last migration...");
            database.rollback_migration().await?;
            info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            for (name, applied) in database.migration_status().await? {
                let status = if applied { "applied" } else { "pending" };
                println!("{}: {}", name, status);
            }
        }
        MigrateAction::Fresh => {
            warn!("Resetting database and running all migrations...");
            database.fresh_migrations().await?;
            info!("Fresh migrations completed successfully");
        }
    }

    database.close().await?;
    Ok(())
}
