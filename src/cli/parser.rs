use clap::{Parser, Subcommand};

/// Command-line interface definition for gitawisdom
#[derive(Parser)]
#[command(
    name = "gitawisdom",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily Bhagavad Gita wisdom in your terminal: quote of the day, saved verses and a karma streak",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the display language for this run (en, hi, sa)
    #[arg(global = true, long = "lang", value_name = "CODE")]
    pub lang: Option<String>,

    /// Pretend the current time is TIMESTAMP (YYYY-MM-DD[ HH:MM])
    #[arg(global = true, long = "at", value_name = "TIMESTAMP")]
    pub at: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Check in for today and update the karma streak
    Checkin,

    /// Show the current karma streak
    Streak {
        /// List past check-ins, most recent first
        #[arg(long = "history")]
        history: bool,

        /// Maximum number of history rows
        #[arg(long = "limit", requires = "history")]
        limit: Option<usize>,
    },

    /// Show the quote of the day
    Quote {
        /// Pick a random verse instead of the quote of the day
        #[arg(long = "random", conflicts_with = "date")]
        random: bool,

        /// Quote of the day for another date (YYYY-MM-DD)
        #[arg(long = "date")]
        date: Option<String>,

        /// Add the quote to your saved collection
        #[arg(long = "save")]
        save: bool,

        /// Print the quote as plain share text
        #[arg(long = "share")]
        share: bool,
    },

    /// Manage saved quotes
    Saved {
        /// List saved quotes (default)
        #[arg(long = "list")]
        list: bool,

        /// Remove a saved verse, e.g. --remove 2.47
        #[arg(long = "remove", value_name = "CH.V", conflicts_with = "share")]
        remove: Option<String>,

        /// Print a saved verse as share text, e.g. --share 2.47
        #[arg(long = "share", value_name = "CH.V")]
        share: Option<String>,
    },

    /// Daily karma acts and points
    Karma {
        /// List today's karma acts (default)
        #[arg(long = "list")]
        list: bool,

        /// Add a new karma act (requires --points)
        #[arg(long = "add", value_name = "TITLE", requires = "points")]
        add: Option<String>,

        /// Points awarded by the new act
        #[arg(long = "points", requires = "add")]
        points: Option<i64>,

        /// Complete an act for today; also counts as a check-in
        #[arg(long = "complete", value_name = "ID", conflicts_with = "add")]
        complete: Option<i64>,
    },

    /// Daily practices
    Practice {
        /// List practices (default)
        #[arg(long = "list")]
        list: bool,

        /// Add a practice
        #[arg(long = "add", value_name = "NAME")]
        add: Option<String>,

        /// Toggle a practice done/pending
        #[arg(long = "done", value_name = "ID")]
        done: Option<i64>,

        /// Delete a practice
        #[arg(long = "del", value_name = "ID")]
        del: Option<i64>,
    },

    /// Browse the chapters and choose a reading translation
    Read {
        /// Show one chapter (1-18)
        #[arg(long = "chapter", value_name = "N")]
        chapter: Option<u32>,

        /// Persist the reading translation (swami-prabhupada, gita-press, sanskrit)
        #[arg(long = "translation", value_name = "ID")]
        translation: Option<String>,
    },

    /// Show your statistics
    Profile,

    /// Show or change the display language
    Lang {
        /// Persist a new language (en, hi, sa)
        #[arg(long = "set", value_name = "CODE")]
        set: Option<String>,
    },

    /// Look up a translation key (dotted, e.g. gitaReading.title)
    Translate { key: String },
}
