//! AuraMart CLI - drive the storefront from the command line.
//!
//! State persists between invocations under the data directory
//! (`AURAMART_DATA_DIR`, default `./auramart-data`), so the cart and the
//! logged-in session survive across commands, the way a browser reload
//! would.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! aura products list
//! aura products list --category "Home Goods"
//! aura products list --new-arrivals
//! aura products list --search headphones
//!
//! # Shop
//! aura cart add 1
//! aura cart set-qty 1 3
//! aura cart show
//! aura checkout --payment "Credit Card"
//!
//! # Accounts
//! aura auth signup -e jane@example.com -p s3cret
//! aura auth login -e jane@example.com -p s3cret
//! aura auth whoami
//! aura auth logout
//!
//! # Admin (requires the admin account)
//! aura admin dashboard
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI's whole job is writing to stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use auramart_app::config::AppConfig;
use auramart_app::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about = "AuraMart storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Confirm the order in the cart (simulated payment)
    Checkout {
        /// Payment method to record on the confirmation
        #[arg(short, long, default_value = "Credit Card")]
        payment: String,
    },
    /// Log in, sign up, or log out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Admin dashboard
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List the displayed products for a filter
    List {
        /// Show a single category (Electronics, Apparel, Home Goods,
        /// Books, Sports, Beauty, Outdoors)
        #[arg(short, long, conflicts_with = "new_arrivals")]
        category: Option<String>,

        /// Show the five most recent products
        #[arg(short, long)]
        new_arrivals: bool,

        /// Case-insensitive search over name and description
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents, item count, and tax-inclusive total
    Show,
    /// Add one unit of a product
    Add {
        /// Product id
        id: String,
    },
    /// Remove a product entirely
    Remove {
        /// Product id
        id: String,
    },
    /// Overwrite a product's quantity (minimum 1)
    SetQty {
        /// Product id
        id: String,
        /// New quantity
        quantity: u32,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in with email and password
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create a customer account
    Signup {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the current session
    Logout,
    /// Show the current session
    Whoami,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Show the admin dashboard (customer accounts and catalog summary)
    Dashboard,
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    let mut app = AppState::from_config(&config);

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                category,
                new_arrivals,
                search,
            } => commands::products::list(&mut app, category.as_deref(), new_arrivals, search)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&app),
            CartAction::Add { id } => commands::cart::add(&mut app, &id)?,
            CartAction::Remove { id } => commands::cart::remove(&mut app, &id),
            CartAction::SetQty { id, quantity } => {
                commands::cart::set_quantity(&mut app, &id, quantity);
            }
        },
        Commands::Checkout { payment } => commands::cart::checkout(&mut app, &payment),
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => {
                commands::auth::login(&mut app, &email, &password)?;
            }
            AuthAction::Signup { email, password } => {
                commands::auth::signup(&mut app, &email, &password)?;
            }
            AuthAction::Logout => commands::auth::logout(&mut app),
            AuthAction::Whoami => commands::auth::whoami(&app),
        },
        Commands::Admin { action } => match action {
            AdminAction::Dashboard => commands::admin::dashboard(&mut app),
        },
    }

    Ok(())
}
