//! Lumina CLI - store seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed any missing collection slots with the starter shop
//! lumina seed
//!
//! # Start the whole shop over from the seed
//! lumina seed --force
//!
//! # Print a collection as JSON
//! lumina inspect orders --status pending
//!
//! # Restore one collection to its seeded state
//! lumina reset cart
//!
//! # Create an admin account
//! lumina admin create -e ops@example.com -p "a long password" -f Ada -l Lovelace
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the collection slots with the starter shop
//! - `inspect` - Print a collection as JSON, with optional filters
//! - `reset` - Restore a collection to its seeded state
//! - `admin create` - Create admin accounts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::Collection;

#[derive(Parser)]
#[command(name = "lumina")]
#[command(author, version, about = "Lumina storefront CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the collection slots with the starter shop
    Seed {
        /// Overwrite slots that already hold data
        #[arg(long)]
        force: bool,
    },
    /// Print a collection as JSON
    Inspect {
        /// Which collection to print
        collection: Collection,

        /// Keep only orders or appointments with this status
        #[arg(long)]
        status: Option<String>,

        /// Keep only products in this category
        #[arg(long)]
        category: Option<String>,

        /// Keep only accounts with this role
        #[arg(long)]
        role: Option<String>,
    },
    /// Restore a collection to its seeded state
    Reset {
        /// Which collection to reset
        collection: Collection,
    },
    /// Manage admin accounts
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new admin account
    Create {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password (stored in plain text, like every account)
        #[arg(short, long)]
        password: String,

        /// First name
        #[arg(short, long, default_value = "Store")]
        first_name: String,

        /// Last name
        #[arg(short, long, default_value = "Admin")]
        last_name: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force)?,
        Commands::Inspect {
            collection,
            status,
            category,
            role,
        } => {
            commands::inspect::run(
                collection,
                status.as_deref(),
                category.as_deref(),
                role.as_deref(),
            )?;
        }
        Commands::Reset { collection } => commands::reset::run(collection)?,
        Commands::Admin { action } => match action {
            AdminAction::Create {
                email,
                password,
                first_name,
                last_name,
            } => {
                commands::admin::create_user(&email, &password, &first_name, &last_name)?;
            }
        },
    }
    Ok(())
}
