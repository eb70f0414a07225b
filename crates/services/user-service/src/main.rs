//! User Service - gRPC server for user lookup.

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppError;
use domain::UserResponse;
use user_service_lib::{config::UserServiceConfig, MigrateAction};

/// Exit code for a lookup that found no record
const EXIT_NOT_FOUND: i32 = 2;

/// Exit code for a lookup that could not be answered
const EXIT_FAILURE: i32 = 1;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User lookup microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve {
        /// Bind address [default: USER_SERVICE_HOST or 0.0.0.0]
        #[arg(long)]
        host: Option<String>,
        /// gRPC port [default: USER_SERVICE_PORT or 50052]
        #[arg(long)]
        port: Option<u16>,
    },
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Look up one user by email and print it as JSON
    Lookup {
        /// Email key to look up
        email: String,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
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
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = UserServiceConfig::from_env();
            let host = host.unwrap_or_else(|| config.host.clone());
            let port = port.unwrap_or(config.port);
            user_service_lib::run_server_with_config(&host, port, config).await?;
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            user_service_lib::run_migrations(migrate_action).await?;
        }
        Commands::Lookup { email } => match user_service_lib::run_lookup(&email).await? {
            Ok(user) => {
                println!("{}", serde_json::to_string_pretty(&UserResponse::from(user))?);
            }
            Err(AppError::NotFound) => {
                error!("No user found for {}", email);
                std::process::exit(EXIT_NOT_FOUND);
            }
            Err(e) => {
                error!("Lookup failed: {}", e);
                std::process::exit(EXIT_FAILURE);
            }
        },
    }

    Ok(())
}
