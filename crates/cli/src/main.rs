mod cmd;
mod logging;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "report-tfvars",
    version,
    about = "List Terraform variables as reusable -var override flags"
)]
pub struct Cli {
    /// Path to Terraform file that contains variables
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Path to Terraform directory to scan for variables
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Settings file (defaults to ./config.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: failed to install error report hooks: {e}");
    }

    let cli = Cli::parse();
    let code = cmd::report::run(&cli);
    logging::shutdown();
    std::process::exit(code);
}
