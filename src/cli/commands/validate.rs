//! `wsm validate` command - Check fixture consistency

use console::style;
use miette::Result;

use crate::cli::helpers::{effective_format, load_config, open_workshop, print_structured};
use crate::cli::GlobalOpts;
use crate::core::{validate, Rule};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Show summary only, don't list individual violations
    #[arg(long)]
    pub summary: bool,
}

const RULES: [Rule; 4] = [
    Rule::UnknownCustomer,
    Rule::VehicleMismatch,
    Rule::PhaseOrder,
    Rule::DuplicateCage,
];

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config();
    let workshop = open_workshop(global, &config)?;
    let violations = validate(&workshop);

    let structured = print_structured(&violations, effective_format(global, &config))?;
    if !structured {
        if !global.quiet {
            println!(
                "{} Checking {} projects and {} cages...\n",
                style("→").blue(),
                workshop.projects().len(),
                workshop.cages().len()
            );
        }

        if !args.summary {
            for v in &violations {
                println!(
                    "{} {} [{}] {}",
                    style("✗").red(),
                    style(&v.subject).cyan(),
                    style(v.rule).dim(),
                    v.message
                );
            }
        }

        println!();
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", style("Validation Summary").bold());
        println!("{}", style("─".repeat(60)).dim());
        for rule in RULES {
            let n = violations.iter().filter(|v| v.rule == rule).count();
            let count = if n == 0 {
                style(n).green()
            } else {
                style(n).red()
            };
            println!("  {:<18} {}", format!("{}:", rule), count);
        }
        println!();
    }

    match violations.len() {
        0 => {
            if !global.quiet && !structured {
                println!("{} All fixtures passed validation!", style("✓").green().bold());
            }
            Ok(())
        }
        1 => Err(miette::miette!("Validation failed: 1 violation")),
        n => Err(miette::miette!("Validation failed: {} violations", n)),
    }
}
