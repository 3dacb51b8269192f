//! Default command: scan the configured target and print overrides.

use std::io;

use tfvars_core::config::{ConfigLoader, TargetOverrides};
use tfvars_core::{Reporter, VariableScanner};
use tracing::{debug, warn};

use crate::Cli;
use crate::logging;

/// Returns the process exit code.
pub fn run(cli: &Cli) -> i32 {
    let overrides = TargetOverrides {
        file: cli.file.clone(),
        dir: cli.dir.clone(),
        log_level: cli.log_level.clone(),
    };

    let rc = match ConfigLoader::load(cli.config.as_deref(), &overrides) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if let Err(e) = logging::init(&rc.logging) {
        eprintln!("Error: {e}");
        return 1;
    }

    for skipped in &rc.skipped_configs {
        warn!(
            "{} is a directory not a file; settings can only be loaded from a file",
            skipped.display()
        );
    }
    if let Some(ref source) = rc.source {
        debug!(config = %source.display(), "loaded settings");
    }

    let scanner = match VariableScanner::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let reporter = Reporter::new(&scanner).with_exclusions(rc.excluded_folders.clone());
    let mut stdout = io::stdout().lock();

    match reporter.run(&rc.target, &mut stdout) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
