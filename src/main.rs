use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use credit_sim::input::{InputRecord, RawInput, RawValue};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_VALIDATION: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    /// Report with range, factors and tips
    #[default]
    Text,
    /// Short plain block for sharing
    Summary,
    /// Pretty-printed JSON
    Json,
}

#[derive(Args, Debug, Default)]
struct EstimateArgs {
    /// Current credit score (300-850)
    #[arg(long)]
    current_score: Option<String>,

    /// Card utilization percent
    #[arg(long = "utilization")]
    utilization_percent: Option<String>,

    /// Percent of payments made on time
    #[arg(long = "on-time")]
    on_time_payments_percent: Option<String>,

    /// Age of the oldest account in years
    #[arg(long = "age")]
    age_oldest_account_years: Option<String>,

    /// Hard inquiries in the last 12 months
    #[arg(long = "inquiries")]
    hard_inquiries_last_12mo: Option<String>,

    /// New accounts opened in the last 12 months
    #[arg(long = "new-accounts")]
    new_accounts_last_12mo: Option<String>,

    /// Number of derogatory marks
    #[arg(long = "derogatory")]
    derogatory_marks: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Skip the 300-850 / 0-100% range checks
    #[arg(long)]
    no_validate: bool,
}

impl EstimateArgs {
    /// Flags as a raw snapshot, to be layered over the profile.
    fn overrides(&self) -> RawInput {
        let text = |v: &Option<String>| v.clone().map(RawValue::Text);
        RawInput {
            current_score: text(&self.current_score),
            utilization_percent: text(&self.utilization_percent),
            on_time_payments_percent: text(&self.on_time_payments_percent),
            age_oldest_account_years: text(&self.age_oldest_account_years),
            hard_inquiries_last_12mo: text(&self.hard_inquiries_last_12mo),
            new_accounts_last_12mo: text(&self.new_accounts_last_12mo),
            derogatory_marks: text(&self.derogatory_marks),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate a projected score range (default if no subcommand)
    Estimate(EstimateArgs),
    /// Interactively create a profile file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "credit-sim")]
#[command(about = "Educational credit score what-if estimator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to profile file (defaults to ~/.config/credit-sim/profile.yaml)
    #[arg(short, long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "credit_sim=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let profile_path = cli.profile.map(PathBuf::from);
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Estimate(EstimateArgs::default()));

    match command {
        Commands::Init => match credit_sim::config::init::run_init_wizard(profile_path) {
            Ok(path) => debug!(path = %path.display(), "init finished"),
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        },
        Commands::Estimate(args) => run_estimate(profile_path, &args),
    }

    std::process::exit(EXIT_SUCCESS);
}

fn run_estimate(profile_path: Option<PathBuf>, args: &EstimateArgs) {
    let profile = match credit_sim::config::load_profile(profile_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Profile error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let raw = profile.snapshot.merge(args.overrides());
    let input = match InputRecord::try_from(raw) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Input error: {}", e);
            eprintln!("Supply it in the profile or with the matching flag (see --help).");
            std::process::exit(EXIT_INPUT);
        }
    };

    if !args.no_validate {
        if let Err(errors) = credit_sim::input::validate_input(&input) {
            eprintln!("Input validation errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_VALIDATION);
        }
    }

    debug!(?input, "estimating");
    let result = credit_sim::scoring::estimate(&input);

    match args.format {
        OutputFormat::Text => {
            let use_colors = credit_sim::output::should_use_colors();
            println!("{}", credit_sim::output::format_result(&result, use_colors));
        }
        OutputFormat::Summary => println!("{}", credit_sim::output::format_summary(&result)),
        OutputFormat::Json => match credit_sim::output::format_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(EXIT_FAILURE);
            }
        },
    }
}
