use clap::{Parser, Subcommand};

/// Command-line interface definition for babylog
#[derive(Parser)]
#[command(
    name = "babylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log baby activities to an append-only CSV and see what happened last",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the event log path (useful for tests or a second log)
    #[arg(global = true, long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// Run in test mode (no config file written by init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the event log
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $VISUAL, $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", requires = "edit_config", help = "Editor to use")]
        editor: Option<String>,
    },

    /// Log an event now
    Log {
        /// Event kind (feed, poop, pee, sleep, wakeup, weight, ...)
        event: String,

        #[arg(long, short, help = "Optional payload, e.g. sx/dx or a weight")]
        data: Option<String>,

        #[arg(long, short, help = "User id from the allow-list (default: default_user)")]
        user: Option<String>,
    },

    /// Log a past event: activity[/data]-HH:MM
    Add {
        /// e.g. `feed/sx-10:25`, `wakeup-00:45`, `poop 10.40`
        #[arg(required = true, num_args = 1..)]
        entry: Vec<String>,

        #[arg(long, short, help = "User id from the allow-list (default: default_user)")]
        user: Option<String>,
    },

    /// Log a free-text comment now
    Comment {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        #[arg(long, short, help = "User id from the allow-list (default: default_user)")]
        user: Option<String>,
    },

    /// Show the last occurrence of each event kind
    Last {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Show today's counts per event kind (comments excluded)
    Counts {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Show every logged entry
    All,

    /// Copy the event log into the backups folder
    Backup {
        #[arg(long = "no-remote", help = "Skip the configured remote archive")]
        no_remote: bool,
    },
}
