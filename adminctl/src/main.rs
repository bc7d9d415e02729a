use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::{directory, pending, session, vendors, Reported};

#[derive(Parser)]
#[command(name = "adminctl", version, about = "Marketplace moderation console")]
struct Cli {
    /// Base URL of the admin API
    #[arg(long, global = true, env = "ADMIN_API_URL")]
    api_url: Option<String>,

    /// Session file holding the bearer token
    #[arg(long, global = true, env = "ADMIN_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a bearer token for later commands
    Login(session::LoginArgs),
    /// Remove the stored bearer token
    Logout,
    /// Show the active configuration and session
    Status,
    /// Approved vendors and their activation lifecycle
    #[command(subcommand)]
    Vendors(vendors::VendorsCommand),
    /// Vendor profiles awaiting approval
    #[command(subcommand)]
    Pending(pending::PendingCommand),
    /// End users
    #[command(subcommand)]
    Users(directory::DirectoryCommand),
    /// Property listings
    #[command(subcommand)]
    Properties(directory::DirectoryCommand),
}

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context::new(cli.api_url, cli.session_file)?;

    match cli.cmd {
        Commands::Login(args) => session::login(&ctx, args),
        Commands::Logout => session::logout(&ctx),
        Commands::Status => session::status(&ctx),
        Commands::Vendors(cmd) => vendors::handle(&ctx, cmd).await,
        Commands::Pending(cmd) => pending::handle(&ctx, cmd).await,
        Commands::Users(cmd) => directory::users(&ctx, cmd).await,
        Commands::Properties(cmd) => directory::properties(&ctx, cmd).await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        if e.downcast_ref::<Reported>().is_none() {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
    Ok(())
}
