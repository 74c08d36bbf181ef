use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use eventecho_core::validation::{MAX_GUESTS, MIN_GUESTS};
use eventecho_core::{BudgetLevel, EventType};
use eventecho_planner::{Config, EventRequest, Planner};

mod commands;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "eventecho", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the vendor catalog CSV (default: data/vendors.csv)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to the booking log CSV (default: ~/.local/share/eventecho/bookings.csv)
    #[arg(long, global = true)]
    bookings: Option<PathBuf>,
}

/// The planning form.
#[derive(Debug, Clone, clap::Args)]
struct EventArgs {
    /// Kind of event: Wedding, Birthday, Corporate, Conference, Graduation, Other
    #[arg(long, default_value = "Wedding", value_parser = parse_event_type)]
    event_type: EventType,

    /// Number of guests
    #[arg(
        long,
        default_value_t = 50,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_GUESTS)..=i64::from(MAX_GUESTS))
    )]
    guests: u32,

    /// Budget level: Budget, Standard, Luxury
    #[arg(long, default_value = "Standard", value_parser = parse_budget_level)]
    budget: BudgetLevel,

    /// Where the event takes place
    #[arg(long, default_value = "City Center")]
    location: String,

    /// Free-text description of what you have in mind
    #[arg(long, default_value = "Intimate and elegant celebration")]
    description: String,
}

impl EventArgs {
    fn to_request(&self) -> EventRequest {
        EventRequest::new(
            self.event_type.as_str(),
            self.guests,
            self.budget.as_str(),
            self.location.as_str(),
            self.description.as_str(),
        )
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Generate an event plan
    ///
    /// Builds a search query from the form, recommends the best-matching
    /// vendors from the catalog, estimates the budget, and asks the
    /// text-generation service for a detailed plan.
    ///
    /// Without an API token, or when the service is slow or unavailable,
    /// the plan is assembled from a built-in template instead. Planning
    /// never fails because of the generation service.
    ///
    /// Output: the plan, the budget breakdown as JSON, and the vendor list.
    /// With --json, a single object with "plan", "budget", and "vendors".
    Plan {
        #[command(flatten)]
        event: EventArgs,

        /// Print one JSON object instead of formatted sections
        #[arg(long)]
        json: bool,
    },
    /// Search the vendor catalog
    Vendors {
        /// Free-text query (e.g. "garden wedding Austin")
        #[arg(required = true)]
        query: Vec<String>,

        /// Number of vendors to show
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Estimate an event budget
    Budget {
        /// Kind of event: Wedding, Birthday, Corporate, Conference, Graduation, Other
        #[arg(long, default_value = "Wedding", value_parser = parse_event_type)]
        event_type: EventType,

        /// Number of guests
        #[arg(
            long,
            default_value_t = 50,
            value_parser = clap::value_parser!(u32).range(i64::from(MIN_GUESTS)..=i64::from(MAX_GUESTS))
        )]
        guests: u32,

        /// Budget level: Budget, Standard, Luxury
        #[arg(long, default_value = "Standard", value_parser = parse_budget_level)]
        budget: BudgetLevel,
    },
    /// Flag an event for booking follow-up
    ///
    /// Appends a Pending row to the booking log. Exits with a non-zero
    /// status if the email is invalid or the log cannot be written.
    Book {
        #[command(flatten)]
        event: EventArgs,

        /// Contact email
        #[arg(long)]
        email: String,

        /// Anything else we should know
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// List flagged bookings
    Bookings {
        /// Show only the most recent N bookings
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file if it does not exist
    Init,
    /// Print one setting, or the whole config file
    Get {
        /// Setting name (omit to print the file)
        key: Option<String>,
    },
    /// Change a setting in the config file
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
}

fn parse_event_type(value: &str) -> Result<EventType, String> {
    EventType::parse(value).ok_or_else(|| {
        let names: Vec<&str> = EventType::ALL.iter().map(EventType::as_str).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_budget_level(value: &str) -> Result<BudgetLevel, String> {
    BudgetLevel::parse(value).ok_or_else(|| {
        let names: Vec<&str> = BudgetLevel::ALL.iter().map(BudgetLevel::as_str).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_overrides(cli.catalog, cli.bookings)?;
    logging::init(&config)?;

    match cli.command {
        Commands::Plan { event, json } => {
            let planner = Planner::from_config(&config)?;
            commands::run_plan(&planner, &event.to_request(), json).await?;
        }
        Commands::Vendors { query, top } => {
            let planner = Planner::from_config(&config)?;
            commands::search_vendors(&planner, &query.join(" "), top)?;
        }
        Commands::Budget {
            event_type,
            guests,
            budget,
        } => {
            commands::show_budget(event_type, guests, budget)?;
        }
        Commands::Book {
            event,
            email,
            notes,
        } => {
            let planner = Planner::from_config(&config)?;
            commands::run_book(&planner, &event.to_request(), email, notes)?;
        }
        Commands::Bookings { limit } => {
            commands::list_bookings(&config.bookings_path, limit)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Get { key } => commands::config::get_config(&config, key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
        },
    }

    Ok(())
}
