/// Warden - account management for the registry gateway
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warden_cli::{config::WardenConfig, state::AppState, version};
use warden_core::User;

#[derive(Parser)]
#[command(name = "warden")]
#[command(about = "Warden user and access token management", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "WARDEN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the admin user and print its access token
    Init,
    /// Create a standard user and print its access token
    CreateUser {
        /// Username
        username: String,
    },
    /// List all users
    ListUsers {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Delete a standard user
    DeleteUser {
        /// Username
        username: String,
    },
    /// Show the user owning an access token
    Whoami {
        /// Access token
        #[arg(long, env = "WARDEN_TOKEN", hide_env_values = true)]
        token: String,
    },
    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays scriptable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warden=info,warden_cli=info,warden_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    match cli.command {
        Commands::Init => {
            let state = connect(config_path.as_deref()).await?;
            let admin = state.users.create_admin_user().await?;
            print_token(&admin);
        }
        Commands::CreateUser { username } => {
            let state = connect(config_path.as_deref()).await?;
            let user = state.users.create_user(&username).await?;
            print_token(&user);
        }
        Commands::ListUsers { json } => {
            let state = connect(config_path.as_deref()).await?;
            let users = state.users.list_users().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                print_table(&users);
            }
        }
        Commands::DeleteUser { username } => {
            let state = connect(config_path.as_deref()).await?;
            state.users.delete_user(&username).await?;
            println!("User '{}' deleted", username);
        }
        Commands::Whoami { token } => {
            let state = connect(config_path.as_deref()).await?;
            let user = state.users.authenticate_by_token(&token).await?;
            println!("{} ({})", user.username, user.role);
        }
        Commands::Version => {
            println!("CLI Version: {}", version::cli_version());
        }
    }

    Ok(())
}

async fn connect(config_path: Option<&Path>) -> anyhow::Result<AppState> {
    let config = WardenConfig::load(config_path)?;
    config.validate()?;
    Ok(AppState::connect(&config).await?)
}

fn print_token(user: &User) {
    println!("Created {} user '{}'", user.role, user.username);
    println!("Access token: {}", user.access_token.expose());
    println!("Store this token now; it will not be shown again.");
}

fn print_table(users: &[User]) {
    if users.is_empty() {
        println!("No users");
        return;
    }

    println!("{:<24} {:<8} {}", "USERNAME", "ROLE", "CREATED");
    for user in users {
        println!(
            "{:<24} {:<8} {}",
            user.username,
            user.role,
            user.created_at.to_rfc3339()
        );
    }
}
