//! `wsm part` command - Parts procurement across every project

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{
    effective_format, format_money, load_config, open_workshop, print_structured, table_config,
};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::labels::{humanize, status_color};
use crate::core::query::{count_by, Category, Filter, PartQuery, PartRow};
use crate::entities::PartStatus;

#[derive(Subcommand, Debug)]
pub enum PartCommands {
    /// List parts with filtering
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in part name, supplier and project name (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (quoted, ordered, in_transit, received, installed)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Category<PartStatus>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 10),
    ColumnDef::new("name", "NAME", 28),
    ColumnDef::new("supplier", "SUPPLIER", 16),
    ColumnDef::new("project", "PROJECT", 36),
    ColumnDef::new("status", "STATUS", 12),
    ColumnDef::new("eta", "ETA", 10),
    ColumnDef::new("cost", "COST", 12),
    ColumnDef::new("cage", "CAGE", 6),
    ColumnDef::new("tracking", "TRACKING", 12),
];

pub fn run(cmd: PartCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PartCommands::List(args) => run_list(args, global),
    }
}

fn part_row(row: &PartRow<'_>) -> TableRow {
    let part = row.part;
    let optional = |value: &Option<String>| match value {
        Some(v) => CellValue::text(v),
        None => CellValue::Empty,
    };
    TableRow::new(part.id.clone())
        .cell("id", CellValue::Id(part.id.clone()))
        .cell("name", CellValue::text(&part.name))
        .cell("supplier", CellValue::text(&part.supplier))
        .cell("project", CellValue::text(row.project_name))
        .cell("status", CellValue::status(part.status.as_str()))
        .cell("eta", CellValue::Date(Some(part.eta)))
        .cell("cost", CellValue::Money(part.cost))
        .cell("cage", optional(&part.cage_number))
        .cell("tracking", optional(&part.tracking_number))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;

    let query = PartQuery {
        text: args.search.into(),
        status: args.status,
    };
    let rows = workshop.part_rows();
    let parts = query.apply(&rows);

    if args.count {
        println!("{}", parts.len());
        return Ok(());
    }

    let format = match effective_format(global, &config) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };
    if print_structured(&parts, format)? {
        return Ok(());
    }

    // The summary always covers every part, whatever the filter
    if !global.quiet && matches!(format, OutputFormat::Tsv) {
        let summary: Vec<String> = count_by(&rows, &PartStatus::ALL, |row| row.part.status)
            .into_iter()
            .map(|(status, n)| {
                let label = format!("{}: {}", humanize(status.as_str()), n);
                status_color(status.as_str()).style().apply_to(label).to_string()
            })
            .collect();
        println!("{}", summary.join("  "));
        println!();
    }

    if parts.is_empty() {
        println!("No parts found.");
        return Ok(());
    }

    TableFormatter::new(COLUMNS, "part")
        .with_config(table_config(global))
        .output(parts.iter().map(|p| part_row(p)), format);

    if !global.quiet && matches!(format, OutputFormat::Tsv) {
        let total: f64 = parts.iter().map(|p| p.part.cost).sum();
        println!("{} {}", style("Total cost:").dim(), format_money(total));
    }

    Ok(())
}
