//! `SequelPort` CLI - migrate Sequel Pro / Sequel Ace favorites to TablePlus
//!
//! Provides commands for running the migration, previewing what it would
//! write, and showing where each application keeps its files.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sequelport_core::config::{ConfigManager, InstallPaths, Settings, SourceApp, TargetApp};
use sequelport_core::error::SequelPortError;
use sequelport_core::migrate::{MigrationOptions, MigrationPreview, MigrationReport, Migrator};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// `SequelPort` command-line interface
#[derive(Parser)]
#[command(name = "sequelport")]
#[command(author, version, about = "Migrate Sequel Pro / Sequel Ace favorites to TablePlus")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Migrate favorites into TablePlus
    #[command(about = "Back up and replace the TablePlus connection files")]
    Migrate {
        #[command(flatten)]
        selection: Selection,

        /// Confirm replacing the TablePlus files
        #[arg(short, long)]
        yes: bool,

        /// Do not back up existing TablePlus files
        #[arg(long)]
        no_backup: bool,

        /// Print the migration report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what a migration would write
    #[command(about = "Read favorites and show the resulting connections without writing")]
    Preview {
        #[command(flatten)]
        selection: Selection,

        /// Output format
        #[arg(long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Save the selection as the default settings
    #[command(about = "Write the chosen source, target and paths to the config file")]
    Init {
        #[command(flatten)]
        selection: Selection,

        /// Save with backups turned off
        #[arg(long)]
        no_backup: bool,
    },

    /// Show resolved file locations
    #[command(about = "Show where favorites are read from and connections are written to")]
    Paths {
        #[command(flatten)]
        selection: Selection,
    },
}

/// Source, target and path overrides shared by every command
#[derive(Args, Debug, Default, Clone)]
pub struct Selection {
    /// Application to read favorites from
    #[arg(short, long, value_enum)]
    pub from: Option<SourceArg>,

    /// TablePlus edition to write to
    #[arg(short, long, value_enum)]
    pub to: Option<TargetArg>,

    /// Read favorites from this file instead
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Write connections to this file instead
    #[arg(long)]
    pub connections: Option<PathBuf>,

    /// Write groups to this file instead
    #[arg(long)]
    pub groups: Option<PathBuf>,
}

/// Source application argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Sequel Pro
    SequelPro,
    /// Sequel Ace
    SequelAce,
}

impl From<SourceArg> for SourceApp {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::SequelPro => Self::SequelPro,
            SourceArg::SequelAce => Self::SequelAce,
        }
    }
}

/// Target edition argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    /// TablePlus from the website or App Store
    Standalone,
    /// TablePlus from Setapp
    Setapp,
}

impl From<TargetArg> for TargetApp {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Standalone => Self::Standalone,
            TargetArg::Setapp => Self::Setapp,
        }
    }
}

/// Output format for the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Migrate {
            selection,
            yes,
            no_backup,
            json,
        } => cmd_migrate(cli.config.as_deref(), &selection, yes, no_backup, json),
        Commands::Preview { selection, format } => {
            cmd_preview(cli.config.as_deref(), &selection, format)
        }
        Commands::Init {
            selection,
            no_backup,
        } => cmd_init(cli.config.as_deref(), &selection, no_backup),
        Commands::Paths { selection } => cmd_paths(cli.config.as_deref(), &selection),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads settings from the config file, then applies command-line overrides
fn resolve_settings(config: Option<&Path>, selection: &Selection) -> Result<Settings, CliError> {
    let settings = match config {
        Some(path) => ConfigManager::load_settings_from(path),
        None => ConfigManager::new().and_then(|manager| manager.load_settings()),
    }
    .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))?;

    Ok(apply_selection(settings, selection))
}

/// Applies command-line overrides on top of file settings
#[must_use]
pub fn apply_selection(mut settings: Settings, selection: &Selection) -> Settings {
    if let Some(from) = selection.from {
        settings.import_from = from.into();
    }
    if let Some(to) = selection.to {
        settings.import_to = to.into();
    }
    if let Some(ref source) = selection.source {
        settings.source_path = Some(source.clone());
    }
    if let Some(ref connections) = selection.connections {
        settings.connections_path = Some(connections.clone());
    }
    if let Some(ref groups) = selection.groups {
        settings.groups_path = Some(groups.clone());
    }
    settings.expanded()
}

fn build_options(
    config: Option<&Path>,
    selection: &Selection,
    confirm_continue: bool,
) -> Result<MigrationOptions, CliError> {
    let settings = resolve_settings(config, selection)?;
    let install = InstallPaths::from_home_dir()
        .map_err(|e| CliError::Config(format!("Failed to resolve home directory: {e}")))?;
    let options = MigrationOptions::from_settings(&settings, &install, confirm_continue);

    debug!(
        from = %options.import_from,
        to = %options.import_to,
        target = %options.paths.connections.display(),
        "Resolved migration options"
    );
    Ok(options)
}

/// Migrate command handler
fn cmd_migrate(
    config: Option<&Path>,
    selection: &Selection,
    yes: bool,
    no_backup: bool,
    json: bool,
) -> Result<(), CliError> {
    let mut options = build_options(config, selection, yes)?;
    if no_backup {
        options.backup = false;
    }

    let report = Migrator::new(options).run()?;
    if !report.performed {
        return Err(CliError::Aborted);
    }

    if json {
        let output = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::Output(format!("Failed to serialize report: {e}")))?;
        println!("{output}");
    } else {
        println!("{}", format_report(&report));
    }
    Ok(())
}

/// Preview command handler
fn cmd_preview(
    config: Option<&Path>,
    selection: &Selection,
    format: OutputFormat,
) -> Result<(), CliError> {
    let options = build_options(config, selection, false)?;
    let preview = Migrator::new(options).preview()?;

    match format {
        OutputFormat::Table => println!("{}", format_preview(&preview)),
        OutputFormat::Json => {
            let output = serde_json::to_string_pretty(&preview)
                .map_err(|e| CliError::Output(format!("Failed to serialize preview: {e}")))?;
            println!("{output}");
        }
    }
    Ok(())
}

/// Init command handler
fn cmd_init(config: Option<&Path>, selection: &Selection, no_backup: bool) -> Result<(), CliError> {
    let mut settings = apply_selection(Settings::default(), selection);
    settings.backup = !no_backup;

    let path = match config {
        Some(path) => {
            ConfigManager::save_settings_to(path, &settings)
                .map_err(|e| CliError::Config(format!("Failed to save settings: {e}")))?;
            path.to_path_buf()
        }
        None => {
            let manager = ConfigManager::new()
                .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}")))?;
            manager
                .save_settings(&settings)
                .map_err(|e| CliError::Config(format!("Failed to save settings: {e}")))?;
            manager.config_file()
        }
    };

    println!("Settings written to {}", path.display());
    Ok(())
}

/// Paths command handler
fn cmd_paths(config: Option<&Path>, selection: &Selection) -> Result<(), CliError> {
    let options = build_options(config, selection, false)?;
    let paths = &options.paths;

    println!("{}", format_path_line(options.import_from.display_name(), &paths.source));
    println!("{}", format_path_line("Connections", &paths.connections));
    println!("{}", format_path_line("Groups", &paths.groups));
    Ok(())
}

fn format_path_line(label: &str, path: &Path) -> String {
    let state = if path.exists() { "exists" } else { "missing" };
    format!("{label:<12} {} ({state})", path.display())
}

/// Formats a finished migration for the terminal
#[must_use]
pub fn format_report(report: &MigrationReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "The connections have been saved!");
    let _ = writeln!(output, "The groups have been saved!");
    let _ = write!(output, "{}", report.summary());

    for backup in &report.backups {
        let _ = write!(output, "\n  backup: {}", backup.display());
    }
    for skipped in &report.skipped {
        let _ = write!(output, "\n  skipped: {} ({})", skipped.identifier, skipped.reason);
    }
    output
}

/// Formats a preview as a table
#[must_use]
pub fn format_preview(preview: &MigrationPreview) -> String {
    if preview.connections.is_empty() {
        return "No favorites found.".to_string();
    }

    let name_width = preview
        .connections
        .iter()
        .map(|c| c.connection_name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    let host_width = preview
        .connections
        .iter()
        .map(|c| c.database_host.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:<name_width$}  {:<host_width$}  {:<6}  {:<3}  GROUP",
        "NAME", "HOST", "PORT", "SSH"
    );
    for conn in &preview.connections {
        let ssh = if conn.is_over_ssh == 1 { "yes" } else { "no" };
        let _ = writeln!(
            output,
            "{:<name_width$}  {:<host_width$}  {:<6}  {:<3}  {}",
            conn.connection_name, conn.database_host, conn.database_port, ssh, conn.group_id
        );
    }
    let _ = write!(
        output,
        "Connections: {}, Groups: {}, Skipped: {}",
        preview.connections.len(),
        preview.groups.len(),
        preview.skipped.len()
    );
    output
}

/// Exit codes for the CLI
pub mod exit_codes {
    /// Success - operation completed successfully
    pub const SUCCESS: i32 = 0;
    /// General error - configuration, source or write failures
    pub const GENERAL_ERROR: i32 = 1;
    /// Aborted - the user did not confirm replacing the TablePlus files
    pub const ABORTED: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Migration error
    #[error(transparent)]
    Migration(#[from] SequelPortError),

    /// Output formatting error
    #[error("Output error: {0}")]
    Output(String),

    /// Migration not confirmed
    #[error("Migration not confirmed; re-run with --yes to replace the TablePlus files")]
    Aborted,
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, source, write, output)
    /// - 2: Aborted at the confirmation gate
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Aborted => exit_codes::ABORTED,
            Self::Config(_) | Self::Migration(_) | Self::Output(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
