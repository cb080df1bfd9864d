//! `wsm job` command - Job tasks across every project

use clap::Subcommand;
use console::style;
use miette::Result;
use serde::Serialize;

use crate::cli::helpers::{effective_format, load_config, open_workshop, print_structured, table_config};
use crate::cli::table::{CellValue, ColumnDef, TableFormatter, TableRow};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::entity::Department;
use crate::core::labels::{humanize, status_color};
use crate::core::query::{count_by, group_by, Category, Filter, TaskQuery, TaskRow};
use crate::entities::TaskStatus;

#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// List tasks with filtering
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Search in task title, project name and assignee (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by department (body, wiring, interior, engineering, paint)
    #[arg(long, short = 'd', default_value = "all")]
    pub department: Category<Department>,

    /// Filter by status (pending, in_progress, blocked, complete)
    #[arg(long, short = 's', default_value = "all")]
    pub status: Category<TaskStatus>,

    /// Only tasks of this project
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// Group into one column per status
    #[arg(long)]
    pub board: bool,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID", 8),
    ColumnDef::new("title", "TITLE", 30),
    ColumnDef::new("project", "PROJECT", 36),
    ColumnDef::new("phase", "PHASE", 26),
    ColumnDef::new("department", "DEPARTMENT", 12),
    ColumnDef::new("assignee", "ASSIGNEE", 20),
    ColumnDef::new("status", "STATUS", 12),
    ColumnDef::new("priority", "PRIORITY", 8),
    ColumnDef::new("due", "DUE", 10),
];

/// One status column of the jobs board
#[derive(Serialize)]
struct BoardColumn<'a> {
    status: TaskStatus,
    count: usize,
    tasks: Vec<&'a TaskRow<'a>>,
}

pub fn run(cmd: JobCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        JobCommands::List(args) => run_list(args, global),
    }
}

fn task_row(row: &TaskRow<'_>) -> TableRow {
    let task = row.task;
    TableRow::new(task.id.clone())
        .cell("id", CellValue::Id(task.id.clone()))
        .cell("title", CellValue::text(&task.title))
        .cell("project", CellValue::text(row.project_name))
        .cell("phase", CellValue::text(row.phase_name))
        .cell("department", CellValue::Department(task.department))
        .cell("assignee", CellValue::text(&task.assignee))
        .cell("status", CellValue::status(task.status.as_str()))
        .cell("priority", CellValue::Priority(task.priority))
        .cell("due", CellValue::Date(Some(task.due_date)))
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;

    if let Some(ref id) = args.project {
        // Unknown project ids are an error rather than an empty list
        workshop.project(id)?;
    }

    let query = TaskQuery {
        text: args.search.into(),
        department: args.department,
        status: args.status,
        project: args.project,
    };
    let rows = workshop.task_rows();
    let tasks = query.apply(&rows);

    if args.count {
        println!("{}", tasks.len());
        return Ok(());
    }

    let format = match effective_format(global, &config) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    if args.board {
        return print_board(&tasks, format, global);
    }

    if print_structured(&tasks, format)? {
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    TableFormatter::new(COLUMNS, "task")
        .with_config(table_config(global))
        .output(tasks.iter().map(|t| task_row(t)), format);

    Ok(())
}

fn print_board(tasks: &[&TaskRow<'_>], format: OutputFormat, global: &GlobalOpts) -> Result<()> {
    let columns: Vec<BoardColumn<'_>> = group_by(tasks, &TaskStatus::ALL, |row| row.task.status)
        .into_iter()
        .map(|(status, tasks)| BoardColumn {
            status,
            count: tasks.len(),
            tasks,
        })
        .collect();

    if print_structured(&columns, format)? {
        return Ok(());
    }

    if !global.quiet {
        let counts: Vec<String> = count_by(tasks, &TaskStatus::ALL, |row| row.task.status)
            .into_iter()
            .map(|(status, n)| format!("{}: {}", humanize(status.as_str()), n))
            .collect();
        println!("{}", style(counts.join("  ")).dim());
    }

    for column in &columns {
        let heading = format!(
            "{} ({})",
            humanize(column.status.as_str()).to_uppercase(),
            column.count
        );
        println!();
        println!(
            "{}",
            status_color(column.status.as_str())
                .style()
                .bold()
                .apply_to(heading)
        );
        if column.tasks.is_empty() {
            println!("  {}", style("No tasks").dim());
        }
        for row in &column.tasks {
            println!(
                "  {:<8} {} {}",
                style(&row.task.id).cyan(),
                row.task.title,
                style(format!("({}, {})", row.task.assignee, row.project_name)).dim()
            );
        }
    }

    Ok(())
}
