//! CLI commands for the dashboard panels
//!
//! Each command prints one panel of the dashboard: headline figures, the
//! department chart, a table page, insights or the worst offenders. Panels
//! that have a tabular form can be written to CSV with `--output`.

use serde_json::json;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::audit::Action;
use crate::display::{format_page, format_records_table};
use crate::error::{EdubudgetError, EdubudgetResult};
use crate::reports::ChartKind;

use super::view::{CliContext, ViewArgs};

fn create_output(path: &Path) -> EdubudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        EdubudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Headline figures plus totals for the filtered view
pub fn handle_summary(ctx: &CliContext, args: &ViewArgs, output: Option<PathBuf>) -> EdubudgetResult<()> {
    let dashboard = ctx.open_view(args)?;
    let report = dashboard.summary();

    if let Some(path) = output {
        report.export_csv(&mut create_output(&path)?)?;
        println!("Summary exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal());
    }
    Ok(())
}

/// Department spending chart for the filtered view
pub fn handle_chart(
    ctx: &CliContext,
    args: &ViewArgs,
    kind: Option<ChartKind>,
    output: Option<PathBuf>,
) -> EdubudgetResult<()> {
    let mut dashboard = ctx.open_view(args)?;
    if let Some(kind) = kind {
        dashboard.set_chart_kind(kind);
    }
    let chart = dashboard.chart();

    if let Some(path) = output {
        chart.export_csv(&mut create_output(&path)?)?;
        println!("Department chart exported to: {}", path.display());
    } else {
        print!("{}", chart.format_terminal());
    }
    Ok(())
}

/// One page of the records table
pub fn handle_table(ctx: &CliContext, args: &ViewArgs, page: usize) -> EdubudgetResult<()> {
    let mut dashboard = ctx.open_view(args)?;
    if page != 1 {
        dashboard.go_to_page(page)?;
        ctx.record(Action::Page, &json!({ "page": page }), Some(dashboard.view().len()));
    }

    let current = dashboard.page();
    print!(
        "{}",
        format_page(&current, dashboard.page_rows(), dashboard.active_sort())
    );
    Ok(())
}

/// Insights over the full dataset
pub fn handle_insights(ctx: &CliContext, output: Option<PathBuf>) -> EdubudgetResult<()> {
    let dashboard = ctx.open_dashboard()?;
    let insights = dashboard.insights();

    if let Some(path) = output {
        insights.export_csv(&mut create_output(&path)?)?;
        println!("Insights exported to: {}", path.display());
    } else {
        print!("{}", insights.format_terminal());
    }
    Ok(())
}

/// Top five budget overruns over the full dataset
pub fn handle_offenders(ctx: &CliContext, output: Option<PathBuf>) -> EdubudgetResult<()> {
    let dashboard = ctx.open_dashboard()?;
    let report = dashboard.offenders();

    if let Some(path) = output {
        report.export_csv(&mut create_output(&path)?)?;
        println!("Offenders exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal());
    }
    Ok(())
}

/// Values accepted by the filter flags
pub fn handle_filters(ctx: &CliContext) -> EdubudgetResult<()> {
    let dashboard = ctx.open_dashboard()?;
    let options = dashboard.filter_options();

    let years: Vec<String> = options.years.iter().map(|y| y.to_string()).collect();
    println!("Years:");
    println!("  {}", years.join(", "));
    println!();
    println!("Departments ({}):", options.departments.len());
    for department in &options.departments {
        println!("  {}", department);
    }
    println!();
    println!("Budget names ({}):", options.programs.len());
    for program in &options.programs {
        println!("  {}", program);
    }
    Ok(())
}

/// Search within the filtered view
pub fn handle_search(ctx: &CliContext, args: &ViewArgs, query: &str) -> EdubudgetResult<()> {
    let dashboard = ctx.open_view(args)?;
    let result = dashboard.table_search(query);
    ctx.record(Action::Search, &json!({ "query": query }), Some(result.total_matches));

    print!(
        "{}",
        format_records_table(
            result.rows.iter().map(|(id, record)| (*id, record)),
            dashboard.active_sort()
        )
    );
    println!("{}", result.summary());
    Ok(())
}
