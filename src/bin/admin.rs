//! CLI administration tool for pointmoney-login.
//!
//! Inspects a user registry without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # List users in the registry
//! cargo run --bin admin -- users list --file users.json
//!
//! # Try a login id/password pair (password is prompted)
//! cargo run --bin admin -- users check admin --file users.json
//!
//! # Validate a registry file
//! cargo run --bin admin -- registry validate --file users.json
//! ```
//!
//! # Environment Variables
//!
//! - `USERS_FILE` (optional): registry path used when `--file` is omitted;
//!   without either, the built-in demo registry is inspected

use pointmoney_login::application::login_form::{FieldErrors, LoginForm};
use pointmoney_login::application::services::LoginService;
use pointmoney_login::domain::entities::LoginOutcome;
use pointmoney_login::domain::repositories::UserRepository;
use pointmoney_login::infrastructure::registry::{InMemoryUserRegistry, load_registry};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Password;
use std::path::PathBuf;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing pointmoney-login.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Registry file (defaults to $USERS_FILE, then the demo registry)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect users
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Registry file operations
    Registry {
        #[command(subcommand)]
        action: RegistryAction,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List all users
    List,

    /// Check a login id/password pair the way the login form does
    Check {
        /// Login id to check
        login_id: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
}

#[derive(Subcommand)]
enum RegistryAction {
    /// Load the registry and report problems
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli
        .file
        .or_else(|| std::env::var("USERS_FILE").ok().map(PathBuf::from));

    let registry = Arc::new(
        load_registry(path.as_deref()).context("Failed to load user registry")?,
    );

    match cli.command {
        Commands::Users { action } => match action {
            UsersAction::List => list_users(&registry).await?,
            UsersAction::Check { login_id, password } => {
                check_login(registry, login_id, password).await?
            }
        },
        Commands::Registry {
            action: RegistryAction::Validate,
        } => validate_registry(&registry),
    }

    Ok(())
}

/// Lists users with their roles.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   Login ID             Name                      Role
///   ──────────────────────────────────────────────────────────
///   admin                管理者                    admin
///   member01             山田 太郎                 member
/// ```
async fn list_users(registry: &InMemoryUserRegistry) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = registry
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<25} {:<10}",
        "Login ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for user in &users {
        let role = if user.is_admin() {
            user.role.as_str().magenta()
        } else {
            user.role.as_str().green()
        };

        println!("  {:<20} {:<25} {}", user.login_id.cyan(), user.name, role);
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Runs the same checks as the login form for one pair.
///
/// # Flow
///
/// 1. Prompt for the password (unless `--password`)
/// 2. Apply the form's field constraints
/// 3. Verify against the registry and report the outcome and destination
async fn check_login(
    registry: Arc<InMemoryUserRegistry>,
    login_id: String,
    password: Option<String>,
) -> Result<()> {
    println!("{}", "🔐 Check Login".bright_blue().bold());
    println!();

    let password = match password {
        Some(p) => p,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let form = LoginForm::new(login_id, password);
    if let Err(errors) = form.validate() {
        let errors = FieldErrors::from(errors);
        println!("{}", "❌ Rejected by field validation".red().bold());
        for message in [errors.login_id, errors.password].into_iter().flatten() {
            println!("  {}", message.yellow());
        }
        return Ok(());
    }

    let service = LoginService::new(registry.clone(), registry);
    let outcome = service
        .verify(&form.to_attempt())
        .await
        .map_err(|e| anyhow::anyhow!("Credential check failed: {}", e))?;

    match outcome {
        LoginOutcome::Success { user } => {
            println!("{}", "✅ Login would succeed".green().bold());
            println!("  Name:        {}", user.name.cyan());
            println!("  Role:        {}", user.role.as_str().cyan());
            println!(
                "  Destination: {}",
                user.role.destination().path().bright_yellow()
            );
        }
        LoginOutcome::AuthFailure => {
            println!("{}", "❌ Invalid login id or password".red().bold());
        }
        LoginOutcome::NotFoundFailure => {
            println!(
                "{}",
                "⚠️  Credentials match but no user record exists".yellow().bold()
            );
        }
    }
    println!();

    Ok(())
}

/// Reports registry statistics and credentials without user records.
///
/// Structural problems (duplicates, empty ids, short passwords) already fail
/// at load time.
fn validate_registry(registry: &InMemoryUserRegistry) {
    println!("{}", "🧾 Registry".bright_blue().bold());
    println!();
    println!(
        "  Credentials: {}",
        registry.credential_count().to_string().bright_white()
    );
    println!(
        "  Users:       {}",
        registry.user_count().to_string().bright_white()
    );

    let orphans = registry.orphaned_credentials();
    if orphans.is_empty() {
        println!();
        println!("{}", "✅ Registry is consistent".green().bold());
    } else {
        println!();
        println!(
            "{}",
            "⚠️  Credentials without a user record (login will report 'user not found'):"
                .yellow()
                .bold()
        );
        for login_id in orphans {
            println!("  - {}", login_id.cyan());
        }
    }
    println!();
}
