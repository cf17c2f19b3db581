use clap::{Parser, Subcommand};
use nutri_core::*;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nutri")]
#[command(about = "Personalized calorie and macronutrient recommendations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a recommendation from a JSON profile
    Recommend {
        /// Profile JSON file (reads stdin when omitted or "-")
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },

    /// Print the service status object (default)
    Status,

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    nutri_core::logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_client_error() => {
            eprintln!("invalid profile: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Recommend { profile, pretty }) => {
            let config = load_config(cli.config.as_deref())?;
            cmd_recommend(profile.as_deref(), pretty, &config)
        }
        Some(Commands::Config { init }) => cmd_config(cli.config, init),
        Some(Commands::Status) | None => cmd_status(),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn cmd_recommend(profile: Option<&Path>, pretty: bool, config: &Config) -> Result<()> {
    let body = match profile {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let request = ProfileRequest::from_json(&body)?;
    let user = request.validate(&config.validation)?;
    let response = recommend(&user, &config.targets)?;

    tracing::info!(
        "Recommended {} kcal (BMR {}, TDEE {})",
        response.recommended_calories,
        response.bmr,
        response.tdee
    );

    print_json(&response, pretty)
}

fn cmd_status() -> Result<()> {
    print_json(&status(), false)
}

fn cmd_config(path: Option<PathBuf>, init: bool) -> Result<()> {
    let path = path.unwrap_or_else(Config::default_config_path);

    if init {
        if path.exists() {
            return Err(Error::Config(format!(
                "Config file already exists at {}",
                path.display()
            )));
        }
        Config::default().save_to(&path)?;
        println!("✓ Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = if path.exists() {
        Config::load_from(&path)?
    } else {
        Config::default()
    };
    print!("{}", config.to_toml()?);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}
