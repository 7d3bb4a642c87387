mod platform;

use std::path::PathBuf;

use clap::Parser;

use platform::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "dashboard",
    version,
    about = "Admin dashboard for freelancers, jobs, news, orders, products, purchases and vendors",
    long_about = "Reads one command per line from stdin and prints the current page after every change.\n\nExamples:\n  dashboard --page vendors\n  dashboard --config dashboard.ron --log both\n\nType `help` at the prompt for the command list."
)]
struct Args {
    /// RON file overriding the default settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where log lines go.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,

    /// Page shown at startup, e.g. `jobs` or `new-vendor`.
    #[arg(long, value_name = "PAGE")]
    page: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    platform::run_app(args.config.as_deref(), args.log, args.page.as_deref())
}
