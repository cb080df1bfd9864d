use clap::Parser;
use miette::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wsm::cli::{Cli, Commands, GlobalOpts};

fn init_tracing(global: &GlobalOpts) {
    let level = if global.quiet {
        "error"
    } else if global.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_tracing(&global);

    match cli.command {
        Commands::Project(cmd) => wsm::cli::commands::project::run(cmd, &global),
        Commands::Job(cmd) => wsm::cli::commands::job::run(cmd, &global),
        Commands::Part(cmd) => wsm::cli::commands::part::run(cmd, &global),
        Commands::Cage(cmd) => wsm::cli::commands::cage::run(cmd, &global),
        Commands::Customer(cmd) => wsm::cli::commands::customer::run(cmd, &global),
        Commands::Team(cmd) => wsm::cli::commands::team::run(cmd, &global),
        Commands::Status(args) => wsm::cli::commands::status::run(args, &global),
        Commands::Validate(args) => wsm::cli::commands::validate::run(args, &global),
        Commands::Completions(args) => wsm::cli::commands::completions::run(args),
        Commands::Config(cmd) => wsm::cli::commands::config::run(cmd, &global),
    }
}
