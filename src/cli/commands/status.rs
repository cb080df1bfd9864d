//! `wsm status` command - Workshop dashboard

use chrono::NaiveDate;
use console::style;
use miette::Result;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{effective_format, format_date, load_config, open_workshop, print_structured};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::labels::{humanize, status_color, status_label};
use crate::core::query::count_by;
use crate::core::{DashboardStats, DerivedStats, StatsDrift, Workshop};
use crate::entities::{CageStatus, Project, ProjectStatus};

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Also count the collections and show where the authored stats drift
    #[arg(long)]
    pub derived: bool,

    /// Reference date for overdue tasks (YYYY-MM-DD, default: today)
    #[arg(long, value_name = "DATE", requires = "derived")]
    pub as_of: Option<NaiveDate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordCount {
    kind: String,
    count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard<'a> {
    stats: DashboardStats,
    recent_projects: &'a [Project],
    projects_by_status: Vec<(ProjectStatus, usize)>,
    cages_by_status: Vec<(CageStatus, usize)>,
    records: Vec<RecordCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    derived: Option<DerivedStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drift: Option<Vec<StatsDrift>>,
}

impl<'a> Dashboard<'a> {
    fn build(workshop: &'a Workshop, recent_limit: usize, derived: Option<DerivedStats>) -> Self {
        let stats = workshop.dashboard_stats();
        let drift = derived.as_ref().map(|d| stats.drift(d));
        Self {
            stats,
            recent_projects: workshop.recent_projects(recent_limit),
            projects_by_status: count_by(workshop.projects(), &ProjectStatus::ALL, |p| p.status),
            cages_by_status: count_by(workshop.cages(), &CageStatus::ALL, |c| c.status),
            records: workshop
                .inventory()
                .into_iter()
                .map(|(kind, count)| RecordCount {
                    kind: kind.to_string(),
                    count,
                })
                .collect(),
            derived,
            drift,
        }
    }
}

pub fn run(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;

    let derived = if args.derived {
        let as_of = args
            .as_of
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        Some(DerivedStats::compute(&workshop, as_of))
    } else {
        None
    };
    let dashboard = Dashboard::build(&workshop, config.recent_limit(), derived);

    let format = effective_format(global, &config);
    if print_structured(&dashboard, format)? {
        return Ok(());
    }

    let table_style = |builder: Builder| {
        if format == OutputFormat::Md {
            builder.build().with(Style::markdown()).to_string()
        } else {
            builder.build().with(Style::rounded()).to_string()
        }
    };

    println!("{}", style("Workshop Dashboard").bold().underlined());
    println!();

    // Headline numbers
    let stats = &dashboard.stats;
    let mut headline = Builder::default();
    match dashboard.derived {
        Some(ref derived) => {
            headline.push_record(["Metric", "Authored", "Derived"]);
            for (label, authored, live) in [
                ("Total Projects", stats.total_projects, derived.total_projects),
                ("Active Projects", stats.active_projects, derived.active_projects),
                ("Completed", stats.completed_this_month, derived.completed),
                ("On Hold", stats.on_hold, derived.on_hold),
                ("Parts in Transit", stats.parts_in_transit, derived.parts_in_transit),
                ("Overdue Tasks", stats.overdue_task_count, derived.overdue_task_count),
                ("Total Cages", stats.total_cages, derived.total_cages),
                ("Active Cages", stats.active_cages, derived.active_cages),
            ] {
                headline.push_record([label.to_string(), authored.to_string(), live.to_string()]);
            }
        }
        None => {
            headline.push_record(["Metric", "Value"]);
            for (label, value) in [
                ("Total Projects", stats.total_projects),
                ("Active Projects", stats.active_projects),
                ("Completed This Month", stats.completed_this_month),
                ("On Hold", stats.on_hold),
                ("Parts in Transit", stats.parts_in_transit),
                ("Overdue Tasks", stats.overdue_task_count),
                ("Total Cages", stats.total_cages),
                ("Active Cages", stats.active_cages),
            ] {
                headline.push_record([label.to_string(), value.to_string()]);
            }
        }
    }
    println!("{}", table_style(headline));

    if let (Some(derived), Some(drift)) = (&dashboard.derived, &dashboard.drift) {
        println!();
        if drift.is_empty() {
            println!(
                "{} Authored stats match the collections as of {}",
                style("✓").green(),
                derived.as_of
            );
        } else {
            println!(
                "{} {} authored stat(s) differ from the collections as of {}",
                style("!").yellow(),
                drift.len(),
                derived.as_of
            );
        }
    }

    // Recent projects
    println!();
    println!("{}", style("Recent Projects").bold());
    if dashboard.recent_projects.is_empty() {
        println!("  {}", style("No projects").dim());
    } else {
        let mut recent = Builder::default();
        recent.push_record(["ID", "Project", "Status", "Progress", "Target"]);
        for project in dashboard.recent_projects {
            recent.push_record([
                project.id.clone(),
                project.name.clone(),
                status_label(project.status).to_string(),
                format!("{}%", project.progress),
                format_date(project.target_date),
            ]);
        }
        println!("{}", table_style(recent));
    }

    // Status breakdown and cage occupancy
    println!();
    println!("{}", style("Projects by Status").bold());
    for (status, count) in &dashboard.projects_by_status {
        println!(
            "  {:<12} {}",
            status_color(status.as_str())
                .style()
                .apply_to(status_label(*status)),
            count
        );
    }

    println!();
    println!("{}", style("Cage Occupancy").bold());
    for (status, count) in &dashboard.cages_by_status {
        println!("  {:<15} {}", humanize(status.as_str()), count);
    }

    if !global.quiet {
        println!();
        let records: Vec<String> = dashboard
            .records
            .iter()
            .map(|r| format!("{} {}", r.count, r.kind))
            .collect();
        println!("{}", style(format!("Loaded: {}", records.join(", "))).dim());
    }

    Ok(())
}
