use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use growbank::cli::{
    run_graduation, run_onboarding, show_children, show_pot, show_pots, show_transactions,
    Prompter,
};
use growbank::config::{GrowBankPaths, Settings};
use growbank::data::MockDataProvider;
use growbank::logging::init_logging;
use growbank::navigation::Route;
use growbank::screens::DashboardConfig;

#[derive(Parser)]
#[command(
    name = "growbank",
    version,
    about = "Youth banking demo for the terminal",
    long_about = "GrowBank is a youth banking demo. Parents onboard a child and \
                  manage allowances and spending limits; young savers track their \
                  savings pots and celebrate turning 18."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Route to start on (e.g. /youth-dashboard)
        #[arg(short, long, default_value = "/")]
        route: String,
    },

    /// Create a child account step by step
    Onboard,

    /// Simulate turning 18 and play the graduation celebration
    Graduate {
        /// Name shown in the celebration
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List savings pots
    Pots,

    /// Show one savings pot and its contribution history
    Pot {
        /// Savings pot ID (e.g. pot1)
        id: String,
    },

    /// List transactions
    #[command(alias = "txn")]
    Transactions {
        /// Only show this child's history
        #[arg(short, long)]
        child: Option<String>,
        /// Filter by description or category
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List child accounts
    Children,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GrowBankPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = init_logging(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let provider = MockDataProvider::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Tui { route }) => {
            drop(out);
            growbank::tui::run_tui(settings, Route::from_path(&route))?;
        }
        Some(Commands::Onboard) => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), out);
            run_onboarding(&provider, &mut prompter)?;
        }
        Some(Commands::Graduate { name }) => {
            let mut config = DashboardConfig::from_settings(&settings);
            if let Some(name) = name {
                config.user_name = name;
            }
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), out);
            run_graduation(&provider, config, &mut prompter)?;
        }
        Some(Commands::Pots) => show_pots(&provider, &mut out)?,
        Some(Commands::Pot { id }) => {
            show_pot(&provider, &id, &mut out)?;
        }
        Some(Commands::Transactions { child, search }) => {
            show_transactions(&provider, child.as_deref(), search.as_deref(), &mut out)?;
        }
        Some(Commands::Children) => show_children(&provider, &mut out)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            writeln!(out, "Settings written to: {}", paths.settings_file().display())?;
        }
        Some(Commands::Config) => {
            writeln!(out, "GrowBank Configuration")?;
            writeln!(out, "======================")?;
            writeln!(out, "Base directory: {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:  {}", paths.settings_file().display())?;
            writeln!(out, "Log directory:  {}", paths.log_dir().display())?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  User name:      {}", settings.user_name)?;
            writeln!(out, "  Demo age:       {}", settings.demo_user_age)?;
            writeln!(out, "  Progress delay: {} ms", settings.progress_delay_ms)?;
            writeln!(out, "  Confetti count: {}", settings.confetti_count)?;
            writeln!(out, "  Tick rate:      {} ms", settings.tick_rate_ms)?;
            writeln!(out, "  Log filter:     {}", settings.log_filter)?;
        }
        None => {
            writeln!(out, "GrowBank - youth banking demo")?;
            writeln!(out)?;
            writeln!(out, "Run 'growbank --help' for usage information.")?;
            writeln!(out, "Run 'growbank tui' to launch the interactive interface.")?;
        }
    }

    Ok(())
}
