//! `wsm project` command - Project board and project detail

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{
    effective_format, format_date, format_money, load_config, open_workshop, print_structured,
    table_config,
};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::labels::{
    department_label, humanize, project_type_label, status_color, status_label,
};
use crate::core::query::{Category, Filter, ProjectQuery};
use crate::entities::{Project, ProjectStatus, ProjectType, TaskStatus};

/// Parts listed on the detail view before "View all"
const PART_PREVIEW: usize = 4;

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects with filtering
    List(ListArgs),

    /// Show a project's details
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in project name and customer name (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status (quote, approved, in_progress, on_hold, suspended, complete)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Category<ProjectStatus>,

    /// Filter by type (new_build, customization, repair)
    #[arg(long = "type", short = 't', default_value = "all")]
    pub project_type: Category<ProjectType>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Project ID (e.g., proj-001)
    pub id: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 10),
    ColumnDef::new("name", "NAME", 40),
    ColumnDef::new("customer", "CUSTOMER", 20),
    ColumnDef::new("type", "TYPE", 15),
    ColumnDef::new("status", "STATUS", 13),
    ColumnDef::new("progress", "PROGRESS", 8),
    ColumnDef::new("target", "TARGET", 10),
];

pub fn run(cmd: ProjectCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProjectCommands::List(args) => run_list(args, global),
        ProjectCommands::Show(args) => run_show(args, global),
    }
}

pub(crate) fn project_row(project: &Project) -> TableRow {
    TableRow::new(project.id.clone())
        .cell("id", CellValue::Id(project.id.clone()))
        .cell("name", CellValue::text(&project.name))
        .cell("customer", CellValue::text(&project.customer_name))
        .cell(
            "type",
            CellValue::text(project_type_label(project.project_type)),
        )
        .cell(
            "status",
            CellValue::status_labelled(project.status.as_str(), status_label(project.status)),
        )
        .cell("progress", CellValue::Percent(project.progress))
        .cell("target", CellValue::Date(project.target_date))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;

    let query = ProjectQuery {
        text: args.search.into(),
        status: args.status,
        project_type: args.project_type,
    };
    let projects = query.apply(workshop.projects());

    if args.count {
        println!("{}", projects.len());
        return Ok(());
    }

    let format = match effective_format(global, &config) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };
    if print_structured(&projects, format)? {
        return Ok(());
    }

    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    TableFormatter::new(COLUMNS, "project")
        .with_config(table_config(global))
        .output(projects.iter().map(|p| project_row(p)), format);

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;
    let project = workshop.project(&args.id)?;

    match effective_format(global, &config) {
        OutputFormat::Id => {
            println!("{}", project.id);
            return Ok(());
        }
        format => {
            if print_structured(project, format)? {
                return Ok(());
            }
        }
    }

    let status_style = status_color(project.status.as_str()).style();

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&project.id).cyan());
    println!("{}: {}", style("Name").bold(), style(&project.name).yellow());
    println!(
        "{}: {} ({})",
        style("Customer").bold(),
        project.customer_name,
        style(&project.customer_id).cyan()
    );
    println!(
        "{}: {}",
        style("Type").bold(),
        project_type_label(project.project_type)
    );
    println!(
        "{}: {}",
        style("Status").bold(),
        status_style.apply_to(status_label(project.status))
    );
    println!("{}: {}%", style("Progress").bold(), project.progress);
    println!("{}", style("─".repeat(60)).dim());

    // Vehicle
    let vehicle = &project.vehicle;
    println!();
    println!("{}", style("Vehicle").bold());
    println!("  {}", vehicle.title());
    println!("  VIN:       {}", vehicle.vin);
    println!("  Color:     {}", vehicle.color);
    println!("  Condition: {}", vehicle.condition);

    // Schedule and budget
    println!();
    println!("{}", style("Schedule").bold());
    println!("  Start:  {}", format_date(project.start_date));
    println!("  Target: {}", format_date(project.target_date));

    println!();
    println!("{}", style("Budget").bold());
    println!("  Budget:    {}", format_money(project.budget));
    match project.budget_used_pct() {
        Some(pct) => println!("  Spent:     {} ({:.0}%)", format_money(project.spent), pct),
        None => println!("  Spent:     {}", format_money(project.spent)),
    }
    println!("  Remaining: {}", format_money(project.remaining_budget()));

    println!();
    let cages = if project.cage_numbers.is_empty() {
        "None assigned".to_string()
    } else {
        project.cage_numbers.join(", ")
    };
    println!("{}: {}", style("Cages").bold(), cages);
    for cage in workshop.cages_for_project(&project.id) {
        println!(
            "  {} {} ({} parts)",
            style(&cage.number).cyan(),
            cage.location,
            cage.parts_count
        );
    }

    // Phases, with tasks expanded for phases in progress
    if !project.phases.is_empty() {
        println!();
        println!("{} ({}):", style("Phases").bold(), project.phases.len());
        for phase in project.ordered_phases() {
            let phase_style = status_color(phase.status.as_str()).style();
            println!(
                "  {}. {:<28} {:>4}%  {}",
                phase.order,
                phase.name,
                phase.progress,
                phase_style.apply_to(humanize(phase.status.as_str()))
            );
            if phase.status == TaskStatus::InProgress {
                for task in &phase.tasks {
                    println!(
                        "       • {} [{}] {} ({})",
                        task.title,
                        department_label(task.department),
                        task.assignee,
                        status_color(task.status.as_str())
                            .style()
                            .apply_to(humanize(task.status.as_str()))
                    );
                }
            }
        }
    }

    // Parts preview
    println!();
    println!("{} ({}):", style("Parts").bold(), project.parts.len());
    if project.parts.is_empty() {
        println!("  {}", style("No parts ordered").dim());
    }
    for part in project.parts.iter().take(PART_PREVIEW) {
        println!(
            "  • {} - {} ({})",
            part.name,
            part.supplier,
            status_color(part.status.as_str())
                .style()
                .apply_to(humanize(part.status.as_str()))
        );
    }
    if project.parts.len() > PART_PREVIEW {
        println!(
            "  {} {}",
            style(format!("View all {} parts:", project.parts.len())).dim(),
            style(format!("wsm part list --search \"{}\"", project.name)).cyan()
        );
    }

    if !project.notes.is_empty() {
        println!();
        println!("{}:", style("Notes").bold());
        for note in &project.notes {
            println!("  • {}", note);
        }
    }

    Ok(())
}
