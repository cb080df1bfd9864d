//! `wsm team` command - Staff roster

use clap::Subcommand;
use miette::Result;

use crate::cli::helpers::{effective_format, load_config, open_workshop, print_structured, table_config};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::Department;
use crate::core::query::{Category, Filter, TeamQuery};
use crate::entities::{Role, TeamMember};

#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List team members with filtering
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in name and email (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by role (admin, manager, technician)
    #[arg(long, short = 'r', default_value = "all")]
    pub role: Category<Role>,

    /// Filter by department (body, wiring, interior, engineering, paint)
    #[arg(long, short = 'd', default_value = "all")]
    pub department: Category<Department>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 10),
    ColumnDef::new("name", "NAME", 22),
    ColumnDef::new("role", "ROLE", 10),
    ColumnDef::new("department", "DEPARTMENT", 12),
    ColumnDef::new("email", "EMAIL", 28),
    ColumnDef::new("phone", "PHONE", 18),
    ColumnDef::new("active", "ACTIVE", 6),
];

pub fn run(cmd: TeamCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        TeamCommands::List(args) => run_list(args, global),
    }
}

fn member_row(member: &TeamMember) -> TableRow {
    TableRow::new(member.id.clone())
        .cell("id", CellValue::Id(member.id.clone()))
        .cell("name", CellValue::text(&member.name))
        .cell("role", CellValue::text(member.role.as_str()))
        .cell("department", CellValue::Department(member.department))
        .cell("email", CellValue::text(&member.email))
        .cell("phone", CellValue::text(&member.phone))
        .cell("active", CellValue::Number(i64::from(member.active_projects)))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;

    let query = TeamQuery {
        text: args.search.into(),
        role: args.role,
        department: args.department,
    };
    let members = query.apply(workshop.team_members());

    if args.count {
        println!("{}", members.len());
        return Ok(());
    }

    let format = match effective_format(global, &config) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };
    if print_structured(&members, format)? {
        return Ok(());
    }

    if members.is_empty() {
        println!("No team members found.");
        return Ok(());
    }

    TableFormatter::new(COLUMNS, "team member")
        .with_config(table_config(global))
        .output(members.iter().map(|m| member_row(m)), format);

    Ok(())
}
