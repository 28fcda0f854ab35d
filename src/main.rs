use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use strict_semver::cli;
use strict_semver::config;
use strict_semver::ui;
use strict_semver::VersionBump;

#[derive(Parser)]
#[command(
    name = "strict-semver",
    version,
    about = "Validate, compare and bump Semantic Versioning 2.0.0 versions"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Disable coloured output")]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that each input is a valid version
    Validate {
        #[arg(required = true, value_name = "VERSION")]
        inputs: Vec<String>,
    },
    /// Compare two versions by precedence
    Compare {
        left: String,
        right: String,
        #[arg(long, help = "Print -1, 0 or 1 instead of a comparison")]
        numeric: bool,
    },
    /// Print the next version
    Bump {
        #[arg(value_name = "VERSION")]
        input: String,
        #[arg(value_enum, help = "Field to bump [default: from config]")]
        level: Option<Level>,
    },
    /// Print versions ordered by precedence
    Sort {
        #[arg(required = true, value_name = "VERSION")]
        inputs: Vec<String>,
        #[arg(short, long, help = "Highest version first")]
        reverse: bool,
    },
    /// Show the fields of a version
    Inspect {
        #[arg(value_name = "VERSION")]
        input: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    Major,
    Minor,
    Patch,
}

impl From<Level> for VersionBump {
    fn from(level: Level) -> Self {
        match level {
            Level::Major => VersionBump::Major,
            Level::Minor => VersionBump::Minor,
            Level::Patch => VersionBump::Patch,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e), !args.no_color);
            std::process::exit(1);
        }
    };
    if args.no_color {
        config.output.color = false;
    }
    let color = config.output.color;
    if !color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let result = match args.command {
        Command::Validate { inputs } => {
            let output = cli::validate(&inputs, &config);
            println!("{}", output.text);
            if !output.success {
                std::process::exit(1);
            }
            return Ok(());
        }
        Command::Compare {
            left,
            right,
            numeric,
        } => cli::compare(&left, &right, numeric, &config),
        Command::Bump { input, level } => cli::bump(level.map(Into::into), &input, &config),
        Command::Sort { inputs, reverse } => cli::sort(&inputs, reverse, &config),
        Command::Inspect { input } => cli::inspect(&input, &config),
    };

    match result {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e), color);
            std::process::exit(1);
        }
    }
}
