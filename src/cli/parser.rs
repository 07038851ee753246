use clap::{Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// Desk check-in terminal: scan badges against a roster and a deadline
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "A desk check-in terminal: scan barcodes or NFC tags, punch a roster, report lateness",
    long_about = None
)]
pub struct Cli {
    /// Override journal database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the journal database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
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

    /// Run the check-in desk: punch scanned codes against the roster
    Scan {
        /// Roster CSV file (first row holds the column titles)
        #[arg(long, value_name = "FILE")]
        roster: String,

        /// Deadline time of day (HH:MM); defaults to the configured one
        #[arg(long, value_name = "HH:MM")]
        deadline: Option<String>,

        #[arg(long = "barcode-col", value_name = "N", help = "Roster column holding barcodes")]
        barcode_col: Option<usize>,

        #[arg(long = "nfc-col", value_name = "N", help = "Roster column holding NFC codes")]
        nfc_col: Option<usize>,

        #[arg(
            long,
            help = "Assign scanned NFC tags to the latest checked-in person instead of punching"
        )]
        overwrite: bool,

        #[arg(long, value_name = "FILE", help = "Save the roster here instead of in place")]
        out: Option<String>,

        #[arg(long, value_name = "FILE", help = "Also export a highlighted XLSX workbook")]
        xlsx: Option<String>,

        /// Codes to process; when empty, one code per line is read from stdin
        codes: Vec<String>,
    },

    /// Show check-in progress for a roster
    Status {
        #[arg(long, value_name = "FILE")]
        roster: String,

        #[arg(long, help = "Print as JSON")]
        json: bool,
    },

    /// Export a roster to XLSX with the code columns highlighted
    Export {
        #[arg(long, value_name = "FILE")]
        roster: String,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "barcode-col", value_name = "N")]
        barcode_col: Option<usize>,

        #[arg(long = "nfc-col", value_name = "N")]
        nfc_col: Option<usize>,
    },

    /// Print the internal log or the scans journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "punches", help = "Print the scans journal")]
        punches: bool,

        #[arg(long = "day", value_name = "YYYY-MM-DD", help = "Restrict --punches to one day")]
        day: Option<String>,
    },
}
