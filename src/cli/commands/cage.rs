//! `wsm cage` command - Storage cages and printable cage labels

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{effective_format, load_config, open_workshop, print_structured, table_config};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::query::{count_by, Category, CageQuery, Filter};
use crate::core::labels::humanize;
use crate::core::{CageLabel, LabelRenderer};
use crate::entities::{Cage, CageStatus};

#[derive(Subcommand, Debug)]
pub enum CageCommands {
    /// List cages with filtering
    List(ListArgs),

    /// Print the label for one cage
    Label(LabelArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in cage number, project name and location (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (active, empty, pending_pickup)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Category<CageStatus>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct LabelArgs {
    /// Cage number (e.g., C-012)
    pub number: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("number", "CAGE", 6),
    ColumnDef::new("location", "LOCATION", 14),
    ColumnDef::new("project", "PROJECT", 30),
    ColumnDef::new("parts", "PARTS", 5),
    ColumnDef::new("status", "STATUS", 14),
];

pub fn run(cmd: CageCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CageCommands::List(args) => run_list(args, global),
        CageCommands::Label(args) => run_label(args, global),
    }
}

fn cage_row(cage: &Cage) -> TableRow {
    let project = match cage.assignment() {
        Some(a) => CellValue::text(a.project_name),
        None => CellValue::Empty,
    };
    TableRow::new(cage.number.clone())
        .cell("number", CellValue::Id(cage.number.clone()))
        .cell("location", CellValue::text(&cage.location))
        .cell("project", project)
        .cell("parts", CellValue::Number(i64::from(cage.parts_count)))
        .cell("status", CellValue::status(cage.status.as_str()))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;

    let query = CageQuery {
        text: args.search.into(),
        status: args.status,
    };
    let cages = query.apply(workshop.cages());

    if args.count {
        println!("{}", cages.len());
        return Ok(());
    }

    let format = match effective_format(global, &config) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };
    if print_structured(&cages, format)? {
        return Ok(());
    }

    if !global.quiet && matches!(format, OutputFormat::Tsv) {
        let summary: Vec<String> = count_by(workshop.cages(), &CageStatus::ALL, |c| c.status)
            .into_iter()
            .map(|(status, n)| format!("{}: {}", humanize(status.as_str()), n))
            .collect();
        println!("{}", style(summary.join("  ")).dim());
        println!();
    }

    if cages.is_empty() {
        println!("No cages found.");
        return Ok(());
    }

    TableFormatter::new(COLUMNS, "cage")
        .with_config(table_config(global))
        .output(cages.iter().map(|c| cage_row(c)), format);

    Ok(())
}

fn run_label(args: LabelArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;
    let cage = workshop.cage(&args.number)?;

    let label = CageLabel::new(cage, config.label_name_words());

    match effective_format(global, &config) {
        OutputFormat::Id => println!("{}", label.number),
        format => {
            if !print_structured(&label, format)? {
                let text = LabelRenderer::new()?.render(&label)?;
                println!("{}", text.trim_end());
            }
        }
    }

    Ok(())
}
