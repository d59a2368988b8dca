use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use edubudget::cli::{
    handle_chart, handle_export, handle_filters, handle_insights, handle_log, handle_offenders,
    handle_search, handle_summary, handle_table, CliContext, ViewArgs,
};
use edubudget::config::{EdubudgetPaths, Settings};
use edubudget::export::ExportFormat;
use edubudget::reports::ChartKind;

#[derive(Parser)]
#[command(
    name = "edubudget",
    version,
    about = "Terminal dashboard for municipal education budget data",
    long_about = "edubudget loads a CSV of education budget lines and shows headline \
                  figures, spending by department, a sortable and paginated table, \
                  insights and the worst budget overruns, from the command line or \
                  an interactive terminal dashboard."
)]
struct Cli {
    /// CSV file to load (overrides the configured data file)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Headline figures and totals for the filtered view
    Summary {
        #[command(flatten)]
        view: ViewArgs,
        /// Write the figures to a CSV file instead of printing them
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Spending by department for the filtered view
    Chart {
        #[command(flatten)]
        view: ViewArgs,
        /// Chart kind (bar or pie); defaults to the configured kind
        #[arg(short, long)]
        kind: Option<ChartKind>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// One page of the records table
    Table {
        #[command(flatten)]
        view: ViewArgs,
        /// Page number, starting at 1
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Largest overrun, year-over-year growth and the most efficient department
    Insights {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// The five largest budget overruns
    Offenders {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the values the filter flags accept
    Filters,

    /// Export the filtered, sorted view
    Export {
        #[command(flatten)]
        view: ViewArgs,
        /// Output file (defaults to the configured export file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format: csv, json or yaml
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,
    },

    /// Search the filtered view by department, budget name, agency or year
    Search {
        query: String,
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Create the settings file and export directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent dashboard activity
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = EdubudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("edubudget - education budget dashboard");
        println!();
        println!("Run 'edubudget --help' for usage information.");
        println!("Run 'edubudget tui' to launch the interactive dashboard.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing edubudget at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!("Data file: {}", settings.resolve_data_file(cli.data).display());
            return Ok(());
        }
        Commands::Config => {
            println!("edubudget Configuration");
            println!("=======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Activity log:     {}", paths.activity_log().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Data file:      {}", settings.resolve_data_file(cli.data).display());
            println!("  Page size:      {}", settings.page_size);
            println!("  Fiscal years:   {:?}", settings.fiscal_years);
            println!("  Chart kind:     {}", settings.default_chart_kind);
            println!("  Export file:    {}", settings.export_file_name);
            println!("  Activity log:   {}", settings.activity_log_enabled);
            return Ok(());
        }
        _ => {}
    }

    let ctx = CliContext::new(paths, settings, cli.data);

    match command {
        Commands::Tui => {
            let dashboard = ctx.open_dashboard()?;
            edubudget::tui::run_tui(dashboard, &ctx.settings, &ctx.paths)?;
        }
        Commands::Summary { view, output } => handle_summary(&ctx, &view, output)?,
        Commands::Chart { view, kind, output } => handle_chart(&ctx, &view, kind, output)?,
        Commands::Table { view, page } => handle_table(&ctx, &view, page)?,
        Commands::Insights { output } => handle_insights(&ctx, output)?,
        Commands::Offenders { output } => handle_offenders(&ctx, output)?,
        Commands::Filters => handle_filters(&ctx)?,
        Commands::Export {
            view,
            output,
            format,
        } => handle_export(&ctx, &view, output, format)?,
        Commands::Search { query, view } => handle_search(&ctx, &view, &query)?,
        Commands::Log { count } => handle_log(&ctx, count)?,
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
