// Rust guideline compliant 2026-10-16

//! TennisFinder CLI - command-line front end for the TennisFinder marketplace.
//!
//! This binary drives the listing, court and user services against a local
//! JSONL data directory. The `--as` flag names the calling user.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tennisfinder_app::DataContext;
use tennisfinder_cli::commands::{self, caller_from_flag, into_app_error};
use tennisfinder_cli::{create_formatter, init_tracing, OutputFormatter};

/// TennisFinder - tennis equipment marketplace and court directory
#[derive(Parser, Debug)]
#[command(name = "tennisfinder")]
#[command(about = "Manage TennisFinder listings, courts and users", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory holding records.jsonl and config.toml
    #[arg(long, global = true, default_value = ".tennisfinder")]
    data_dir: PathBuf,

    /// Configuration file to use instead of <data-dir>/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Act as this user id
    #[arg(long = "as", global = true, value_name = "USER_ID")]
    as_user: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Output format (json, table, plain)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace); defaults to the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append JSON log lines to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register and inspect users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage marketplace listings
    Listing {
        #[command(subcommand)]
        action: ListingAction,
    },

    /// Manage courts
    Court {
        #[command(subcommand)]
        action: CourtAction,
    },

    /// Replace all courts with demo data (not available in production)
    Seed,
}

#[derive(Subcommand, Debug)]
enum UserAction {
    /// Register a new user
    Register {
        /// Email address
        #[arg(long)]
        email: String,

        /// First name
        #[arg(long)]
        first_name: Option<String>,

        /// Last name
        #[arg(long)]
        last_name: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Role (player, court_owner, admin); defaults to the configured role
        #[arg(long)]
        role: Option<String>,
    },

    /// Show a user profile (defaults to the --as user)
    Show {
        /// User ID
        id: Option<String>,
    },

    /// Fill in missing registration defaults for a user
    EnsureDefaults {
        /// User ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum ListingAction {
    /// Create a listing owned by the --as user
    Create(commands::listing::CreateArgs),

    /// Update a listing you own
    Update {
        /// Listing ID
        id: String,

        #[command(flatten)]
        fields: commands::listing::UpdateArgs,
    },

    /// Delete a listing you own
    Delete {
        /// Listing ID
        id: String,
    },

    /// Flip a listing you own between Available and Sold
    Toggle {
        /// Listing ID
        id: String,
    },

    /// Show a listing
    Show {
        /// Listing ID
        id: String,
    },

    /// List available listings, newest first
    List {
        /// Only your own listings, any status
        #[arg(long, conflicts_with = "all")]
        mine: bool,

        /// Every listing, any status (admin only by default)
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
enum CourtAction {
    /// Create a court owned by the --as user
    Create(commands::court::CreateArgs),

    /// Update a court you own
    Update {
        /// Court ID
        id: String,

        #[command(flatten)]
        fields: commands::court::UpdateArgs,
    },

    /// Delete a court you own
    Delete {
        /// Court ID
        id: String,
    },

    /// Show a court
    Show {
        /// Court ID
        id: String,
    },

    /// List courts, newest first
    List {
        /// Only your own courts
        #[arg(long)]
        mine: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format);

    match run(cli, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let error = into_app_error(error);
            tracing::debug!(code = ?error.code(), "command failed");
            if format == "json" {
                println!("{}", formatter.format_error(&error));
            } else {
                eprintln!("{}", formatter.format_error(&error));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    let ctx = DataContext::open(&cli.data_dir, cli.config.as_deref())?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(ctx.config().log_level.as_str());
    let _guard = init_tracing(level, cli.log_file.as_deref())?;

    let caller = caller_from_flag(cli.as_user.as_deref());

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Register {
                email,
                first_name,
                last_name,
                phone,
                role,
            } => {
                commands::user::register(
                    &ctx, email, first_name, last_name, phone, role, formatter,
                )?;
            }
            UserAction::Show { id } => {
                commands::user::show(&ctx, id, caller.as_ref(), formatter)?;
            }
            UserAction::EnsureDefaults { id } => {
                commands::user::ensure_defaults(&ctx, id, formatter)?;
            }
        },
        Commands::Listing { action } => match action {
            ListingAction::Create(args) => {
                commands::listing::create(&ctx, &caller, args, formatter)?;
            }
            ListingAction::Update { id, fields } => {
                commands::listing::update(&ctx, &caller, id, fields, formatter)?;
            }
            ListingAction::Delete { id } => {
                commands::listing::delete(&ctx, &caller, id, formatter)?;
            }
            ListingAction::Toggle { id } => {
                commands::listing::toggle(&ctx, &caller, id, formatter)?;
            }
            ListingAction::Show { id } => {
                commands::listing::show(&ctx, id, formatter)?;
            }
            ListingAction::List { mine, all } => {
                let scope = commands::listing::ListScope::from_flags(mine, all);
                commands::listing::list(&ctx, &caller, scope, formatter)?;
            }
        },
        Commands::Court { action } => match action {
            CourtAction::Create(args) => {
                commands::court::create(&ctx, &caller, args, formatter)?;
            }
            CourtAction::Update { id, fields } => {
                commands::court::update(&ctx, &caller, id, fields, formatter)?;
            }
            CourtAction::Delete { id } => {
                commands::court::delete(&ctx, &caller, id, formatter)?;
            }
            CourtAction::Show { id } => {
                commands::court::show(&ctx, id, formatter)?;
            }
            CourtAction::List { mine } => {
                commands::court::list(&ctx, &caller, mine, formatter)?;
            }
        },
        Commands::Seed => {
            commands::seed::execute(&ctx, formatter)?;
        }
    }

    Ok(())
}
