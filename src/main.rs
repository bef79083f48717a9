//! Western Armenian Hangman - CLI
//!
//! Full-screen TUI by default, with text-mode rounds and profile commands.

use anyhow::Result;
use chrono::NaiveDate;
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use hangman_armenian::{
    commands::{
        RoundInput, run_analyze, run_categories, run_daily, run_practice, run_settings, run_stats,
    },
    config::AppConfig,
    game::{Clock, PlaySessionCoordinator, RoundSummary, SystemClock},
    interactive::{App, run_tui},
    profile::{PreferenceKey, SettingsStore},
    storage::SharedStore,
    wordlists::WordCatalog,
};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman for learning Western Armenian vocabulary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for statistics and settings (env: HANGMAN_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Custom word list file with [Category] sections (env: HANGMAN_WORDLIST)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Category for practice rounds (default: all categories)
        #[arg(short, long)]
        category: Option<String>,

        /// Start with today's daily challenge
        #[arg(long)]
        daily: bool,
    },

    /// Practice round in the terminal
    Practice {
        /// Category to draw from (default: all categories)
        #[arg(short, long)]
        category: Option<String>,

        /// Letters to guess in order instead of reading from stdin
        #[arg(short, long)]
        guesses: Option<String>,
    },

    /// Today's daily challenge, once per day
    Daily {
        /// Letters to guess in order instead of reading from stdin
        #[arg(short, long)]
        guesses: Option<String>,

        /// Play as if today were this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List categories with word counts
    Categories,

    /// Show statistics
    Stats {
        /// Zero all statistics first
        #[arg(long)]
        reset: bool,
    },

    /// Show settings, or set one (toggles when no value is given)
    Settings {
        /// Preference to change
        #[arg(value_enum)]
        key: Option<PreferenceKey>,

        /// New value: on/off, true/false, yes/no
        #[arg(value_parser = BoolishValueParser::new())]
        value: Option<bool>,
    },

    /// Auto-play the word list and report how hard each word is
    Analyze {
        /// Only analyze this category
        #[arg(short, long)]
        category: Option<String>,

        /// Strategy: frequency (default) or alphabetical
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        category: None,
        daily: false,
    });

    init_tracing(cli.verbose, matches!(command, Commands::Play { .. }));

    let config = AppConfig::from_env().with_overrides(cli.data_dir, cli.wordlist);
    let catalog = config.load_catalog()?;

    match command {
        Commands::Play { category, daily } => run_play_command(&config, catalog, category, daily),
        Commands::Practice { category, guesses } => {
            run_round_command(&config, catalog, guesses.as_deref(), |coordinator, input, sound| {
                run_practice(coordinator, category.as_deref(), input, sound)
            })
        }
        Commands::Daily { guesses, date } => {
            let today = date.unwrap_or_else(|| SystemClock.today());
            run_round_command(&config, catalog, guesses.as_deref(), |coordinator, input, sound| {
                run_daily(coordinator, today, input, sound)
            })
        }
        Commands::Categories => {
            run_categories(&catalog);
            Ok(())
        }
        Commands::Stats { reset } => Ok(run_stats(config.open_store()?, reset)?),
        Commands::Settings { key, value } => Ok(run_settings(config.open_store()?, key, value)?),
        Commands::Analyze { category, strategy } => Ok(run_analyze(
            &catalog,
            category.as_deref(),
            &strategy,
            config.max_attempts,
        )?),
    }
}

/// Log to stderr; the TUI stays quiet unless asked
fn init_tracing(verbose: bool, tui: bool) {
    let level = match (verbose, tui) {
        (true, _) => LevelFilter::DEBUG,
        (false, true) => LevelFilter::OFF,
        (false, false) => LevelFilter::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_coordinator(
    config: &AppConfig,
    catalog: WordCatalog,
    store: SharedStore,
) -> PlaySessionCoordinator {
    PlaySessionCoordinator::new(catalog, store).with_max_attempts(config.max_attempts)
}

/// Text-mode round with guesses from `--guesses` or stdin
fn run_round_command<F>(
    config: &AppConfig,
    catalog: WordCatalog,
    guesses: Option<&str>,
    play: F,
) -> Result<()>
where
    F: FnOnce(
        &mut PlaySessionCoordinator,
        RoundInput<'_>,
        bool,
    ) -> hangman_armenian::Result<Option<RoundSummary>>,
{
    let store = config.open_store()?;
    let sound = SettingsStore::load(store.clone()).get(PreferenceKey::SoundEffects);
    let mut coordinator = build_coordinator(config, catalog, store);

    let input = guesses.map_or(RoundInput::Interactive, RoundInput::Scripted);
    play(&mut coordinator, input, sound)?;
    Ok(())
}

fn run_play_command(
    config: &AppConfig,
    catalog: WordCatalog,
    category: Option<String>,
    daily: bool,
) -> Result<()> {
    let alphabet = catalog.alphabet();

    let store = config.open_store()?;
    let settings = SettingsStore::load(store.clone());
    let coordinator = build_coordinator(config, catalog, store);

    let mut app = App::new(coordinator, settings, alphabet);
    app.category = category;
    if daily {
        app.start_daily();
    } else {
        app.start_practice();
    }

    run_tui(app)
}
