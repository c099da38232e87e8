use clap::{Parser, Subcommand};
use macro_core::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "macroplan")]
#[command(about = "Daily calorie and macronutrient planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a nutrition plan (default)
    Plan(PlanArgs),

    /// List activity levels, goals and fat-loss intensities
    Levels,

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Default)]
struct PlanArgs {
    /// Body weight in kilograms (30-200)
    #[arg(long)]
    weight: Option<f64>,

    /// Height, feet part (4-7)
    #[arg(long)]
    feet: Option<u32>,

    /// Height, inches part (0-11)
    #[arg(long)]
    inches: Option<u32>,

    /// Age in years (15-80)
    #[arg(long)]
    age: Option<u32>,

    /// male or female
    #[arg(long)]
    gender: Option<String>,

    /// Activity level 1 (sedentary) to 5 (extra active)
    #[arg(long)]
    activity: Option<u8>,

    /// fat_loss, bulk, maintenance or recomp
    #[arg(long)]
    goal: Option<String>,

    /// Fat-loss intensity 1 (mild) to 3 (aggressive)
    #[arg(long)]
    intensity: Option<u8>,

    /// Output format (text, json, csv)
    #[arg(long)]
    format: Option<String>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate the config file
    Check,

    /// Print the config file path
    Path,
}

fn main() -> ExitCode {
    // Bad flags exit 1 like every other input error; --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if cli.verbose {
        macro_core::logging::init_with_level("debug");
    } else {
        macro_core::logging::init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_config_path()?,
    };

    match cli.command {
        Some(Commands::Plan(args)) => cmd_plan(&config_path, args),
        Some(Commands::Levels) => cmd_levels(),
        Some(Commands::Config { action }) => cmd_config(&config_path, action),
        None => {
            // Default to "plan" with config defaults
            cmd_plan(&config_path, PlanArgs::default())
        }
    }
}

fn cmd_plan(config_path: &Path, args: PlanArgs) -> Result<()> {
    let config = Config::load_or_default(config_path)?;

    // Flags override config defaults field by field
    let defaults = config.defaults;
    let form = PlanForm {
        weight_kg: args.weight.unwrap_or(defaults.weight_kg),
        height_ft: args.feet.unwrap_or(defaults.height_ft),
        height_in: args.inches.unwrap_or(defaults.height_in),
        age_years: args.age.unwrap_or(defaults.age_years),
        gender: args.gender.unwrap_or(defaults.gender),
        activity: args.activity.unwrap_or(defaults.activity),
        goal: args.goal.unwrap_or(defaults.goal),
        intensity: args.intensity.unwrap_or(defaults.intensity),
    };

    let format = match args.format {
        Some(ref f) => f.parse()?,
        None => config.output.format,
    };

    tracing::debug!(
        "Resolved config {:?}, output format {:?}",
        config_path,
        format
    );

    let request = form.validate()?;
    let report = generate_plan(&request);

    print!("{}", render(&report, &request, format)?);
    Ok(())
}

fn cmd_levels() -> Result<()> {
    println!("Activity levels:");
    for level in ActivityLevel::ALL {
        println!(
            "  {}  {:<18} x{}",
            level.level(),
            level.label(),
            level.factor()
        );
    }

    println!();
    println!("Goals:");
    for goal in Goal::ALL {
        println!("  {}", goal.label());
    }

    println!();
    println!("Fat loss intensities:");
    for intensity in Intensity::ALL {
        println!(
            "  {}  {:<10} deficit {:.0}%, fat {}%",
            intensity.level(),
            intensity.label(),
            intensity.deficit() * 100.0,
            intensity.fat_percent()
        );
    }

    Ok(())
}

fn cmd_config(config_path: &Path, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                return Err(Error::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                )));
            }
            Config::default().save_to(config_path)?;
            println!("✓ Wrote default config to {}", config_path.display());
        }
        ConfigAction::Check => {
            let config = Config::load_or_default(config_path)?;
            config.validate()?;
            println!("✓ Config is valid");
        }
        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}
