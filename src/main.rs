use anyhow::Result;
use clap::{Parser, Subcommand};

use solo_cli::config::settings::{Settings, DEFAULT_DATE_FORMAT, DEFAULT_MINIMUM_AGE};
use solo_cli::flow::Profile;
use solo_cli::tui::run_flow;

#[derive(Parser)]
#[command(
    name = "solo",
    author = "Toichubek Pazylov",
    version,
    about = "Terminal-based guided onboarding flow",
    long_about = "Solo walks a new user through a short onboarding flow: \
                  name, email, and date of birth, followed by a confirmation. \
                  Nothing is stored; the entered profile is printed once the \
                  flow completes and then discarded."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Minimum age (whole years) accepted at the date-of-birth step
    #[arg(long, env = "SOLO_MINIMUM_AGE", default_value_t = DEFAULT_MINIMUM_AGE, global = true)]
    minimum_age: u32,

    /// strftime format for date entry
    #[arg(long, env = "SOLO_DATE_FORMAT", default_value = DEFAULT_DATE_FORMAT, global = true)]
    date_format: String,

    /// Print the completed profile as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the onboarding flow (default)
    #[command(alias = "start")]
    Flow,

    /// Show the effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.minimum_age, cli.date_format.clone());

    match cli.command {
        Some(Commands::Config) => {
            println!("Solo Configuration");
            println!("==================");
            println!("Minimum age:  {}", settings.minimum_age_years);
            println!("Date format:  {} ({})", settings.date_format, settings.date_hint());
        }
        Some(Commands::Flow) | None => {
            let date_format = settings.date_format.clone();
            match run_flow(settings)? {
                Some(profile) => report_completed(&profile, &date_format, cli.json)?,
                None => {
                    println!("Onboarding was not completed. Nothing was saved.");
                }
            }
        }
    }

    Ok(())
}

/// Print the completed profile to stdout
fn report_completed(profile: &Profile, date_format: &str, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        println!("Welcome aboard, {}!", profile.full_name());
        println!();
        println!("  Name:           {}", profile.full_name());
        println!("  Email:          {}", profile.email);
        println!(
            "  Date of birth:  {}",
            profile.date_of_birth.format(date_format)
        );
    }
    Ok(())
}
