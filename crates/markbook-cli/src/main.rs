//! markbook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "markbook",
    version,
    about = "Trainee assessment tracking and quiz marking"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark a quiz and optionally record the result against a trainee
    Mark {
        /// Path to the quiz .toml file
        #[arg(long)]
        quiz: PathBuf,

        /// Email of the trainee to record the assessment against
        #[arg(long)]
        trainee: Option<String>,

        /// Roster file (defaults to the configured roster)
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to a quiz file or directory (defaults to the configured quiz directory)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Summarise every trainee in a roster
    Report {
        /// Roster file (defaults to the configured roster)
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the report to the output directory
        #[arg(long)]
        save: bool,

        /// Output directory (defaults to the configured output directory)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Add a trainee to a roster
    AddTrainee {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address, unique within the roster
        #[arg(long)]
        email: String,

        /// Date of birth as YYYY-MM-DD
        #[arg(long)]
        date_of_birth: String,

        /// Roster file (defaults to the configured roster)
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config, example quiz, and empty roster
    Init,
}

fn main() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "markbook=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Mark {
            quiz,
            trainee,
            roster,
            format,
            config,
        } => commands::mark::execute(quiz, trainee, roster, format, config),
        Commands::Validate { quiz, config } => commands::validate::execute(quiz, config),
        Commands::Report {
            roster,
            format,
            save,
            output,
            config,
        } => commands::report::execute(roster, format, save, output, config),
        Commands::AddTrainee {
            name,
            email,
            date_of_birth,
            roster,
            config,
        } => commands::add_trainee::execute(name, email, date_of_birth, roster, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
