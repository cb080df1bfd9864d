//! `wsm customer` command - Customer records

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::commands::project::project_row;
use crate::cli::helpers::{effective_format, load_config, open_workshop, print_structured, table_config};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::query::{CustomerQuery, Filter};
use crate::core::Workshop;
use crate::entities::{Customer, Project};

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List customers
    List(ListArgs),

    /// Show a customer's details and projects
    Show(ShowArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in name, email and phone (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Customer ID (e.g., cust-001)
    pub id: String,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 10),
    ColumnDef::new("name", "NAME", 20),
    ColumnDef::new("email", "EMAIL", 28),
    ColumnDef::new("phone", "PHONE", 18),
    ColumnDef::new("projects", "PROJECTS", 8),
    ColumnDef::new("active", "ACTIVE", 6),
    ColumnDef::new("since", "SINCE", 10),
];

const PROJECT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 10),
    ColumnDef::new("name", "NAME", 40),
    ColumnDef::new("type", "TYPE", 15),
    ColumnDef::new("status", "STATUS", 13),
    ColumnDef::new("progress", "PROGRESS", 8),
];

/// Customer record with its live project counts
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomerSummary<'a> {
    #[serde(flatten)]
    customer: &'a Customer,
    projects: usize,
    active_projects: usize,
}

impl<'a> CustomerSummary<'a> {
    fn new(workshop: &Workshop, customer: &'a Customer) -> Self {
        Self {
            customer,
            projects: workshop.projects_for_customer(&customer.id).len(),
            active_projects: workshop.active_projects_for_customer(&customer.id).len(),
        }
    }
}

#[derive(Serialize)]
struct CustomerDetail<'a> {
    #[serde(flatten)]
    summary: CustomerSummary<'a>,
    #[serde(rename = "projectList")]
    project_list: Vec<&'a Project>,
}

pub fn run(cmd: CustomerCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        CustomerCommands::List(args) => run_list(args, global),
        CustomerCommands::Show(args) => run_show(args, global),
    }
}

fn customer_row(summary: &CustomerSummary<'_>) -> TableRow {
    let customer = summary.customer;
    TableRow::new(customer.id.clone())
        .cell("id", CellValue::Id(customer.id.clone()))
        .cell("name", CellValue::text(&customer.name))
        .cell("email", CellValue::text(&customer.email))
        .cell("phone", CellValue::text(&customer.phone))
        .cell("projects", CellValue::Number(summary.projects as i64))
        .cell("active", CellValue::Number(summary.active_projects as i64))
        .cell("since", CellValue::Date(Some(customer.created_at)))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;

    let query = CustomerQuery {
        text: args.search.into(),
    };
    let summaries: Vec<CustomerSummary<'_>> = query
        .apply(workshop.customers())
        .into_iter()
        .map(|c| CustomerSummary::new(&workshop, c))
        .collect();

    if args.count {
        println!("{}", summaries.len());
        return Ok(());
    }

    let format = match effective_format(global, &config) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };
    if print_structured(&summaries, format)? {
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No customers found.");
        return Ok(());
    }

    TableFormatter::new(COLUMNS, "customer")
        .with_config(table_config(global))
        .output(summaries.iter().map(customer_row), format);

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;
    let customer = workshop.customer(&args.id)?;

    let format = effective_format(global, &config);
    if format == OutputFormat::Id {
        println!("{}", customer.id);
        return Ok(());
    }

    let detail = CustomerDetail {
        summary: CustomerSummary::new(&workshop, customer),
        project_list: workshop.projects_for_customer(&customer.id),
    };
    if print_structured(&detail, format)? {
        return Ok(());
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}: {}", style("ID").bold(), style(&customer.id).cyan());
    println!("{}: {}", style("Name").bold(), style(&customer.name).yellow());
    println!("{}: {}", style("Email").bold(), customer.email);
    println!("{}: {}", style("Phone").bold(), customer.phone);
    println!("{}: {}", style("Address").bold(), customer.address);
    println!(
        "{}: {}",
        style("Customer since").bold(),
        customer.created_at.format("%Y-%m-%d")
    );
    println!(
        "{}: {} ({} active)",
        style("Projects").bold(),
        detail.summary.projects,
        detail.summary.active_projects
    );
    println!("{}", style("─".repeat(60)).dim());

    println!();
    if detail.project_list.is_empty() {
        println!("  {}", style("No projects").dim());
        return Ok(());
    }
    TableFormatter::new(PROJECT_COLUMNS, "project")
        .with_config(table_config(global))
        .output(detail.project_list.iter().map(|p| project_row(p)), OutputFormat::Tsv);

    Ok(())
}
