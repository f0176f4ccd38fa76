use crate::export::ExportFormat;
use crate::models::clock_format::ClockFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchCalc
/// CLI application to log punch in/out times and compute worked, break and remaining time
#[derive(Parser)]
#[command(
    name = "rpunchcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "A punch clock calculator: log punch in/out pairs and see worked, break and remaining time",
    long_about = None
)]
pub struct Cli {
    /// Override the saved punch log path (useful for tests or a second log)
    #[arg(global = true, long = "state")]
    pub state: Option<String>,

    /// Display times in 12h or 24h format (overrides the configuration)
    #[arg(global = true, long = "clock", value_enum)]
    pub clock: Option<ClockFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file and start an empty punch log
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a punch in / punch out pair
    Add {
        /// Punch in time (e.g. 09:00 AM or 09:00)
        #[arg(long = "in", help = "Punch in time (HH:MM or HH:MM AM/PM)")]
        start: Option<String>,

        /// Punch out time
        #[arg(
            long = "out",
            conflicts_with = "open",
            help = "Punch out time (HH:MM or HH:MM AM/PM)"
        )]
        end: Option<String>,

        /// Leave the punch out open (ends at the current time)
        #[arg(long = "open", help = "Punch out at the current time, updated live")]
        open: bool,
    },

    /// Change the times of an existing punch
    Edit {
        /// Punch id (see `status`)
        id: u64,

        #[arg(long = "in", help = "New punch in time")]
        start: Option<String>,

        #[arg(long = "out", conflicts_with = "now", help = "New punch out time")]
        end: Option<String>,

        #[arg(long = "now", help = "Punch out at the current time, updated live")]
        now: bool,
    },

    /// Remove a punch by id
    Del {
        /// Punch id (see `status`)
        id: u64,
    },

    /// Set the expected work hours for the day (0-24)
    Quota {
        /// Hours, e.g. 8 or 7.5
        #[arg(allow_negative_numbers = true)]
        hours: f64,
    },

    /// Show the punch log with worked, break and remaining time
    Status,

    /// Replace the punch log with the pairs found in a CSV / text file
    Import {
        /// File with one `punch in, punch out` pair per line
        file: String,

        #[arg(long = "dry-run", help = "Only show the parsed rows")]
        dry_run: bool,
    },

    /// Replace the punch log with pairs typed or piped in
    Bulk {
        /// Text with one pair per line; read from stdin when omitted
        #[arg(long = "text")]
        text: Option<String>,

        #[arg(long = "dry-run", help = "Only show the parsed rows")]
        dry_run: bool,
    },

    /// Export the punch log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output path (default: punches-<today>.<format> in the current directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Discard the punch log and start over
    Reset,

    /// Keep the totals on screen, refreshing on every tick
    Watch {
        /// Seconds between refreshes (default from configuration)
        #[arg(long = "interval")]
        interval: Option<u64>,

        /// Stop after this many refreshes (0 = until interrupted)
        #[arg(long = "ticks", default_value_t = 0)]
        ticks: u64,
    },
}
