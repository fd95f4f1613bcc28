//! Script command handler for the graph test-script protocol.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use campuspaths_lib::ScriptRunner;

/// Execute a script from `file`, or from stdin when `file` is `None`.
pub fn handle_script(file: Option<&Path>) -> Result<()> {
    let mut runner = ScriptRunner::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match file {
        Some(path) => {
            let handle = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            runner
                .run(BufReader::new(handle), &mut out)
                .with_context(|| format!("failed to run script {}", path.display()))?;
        }
        None => {
            let stdin = io::stdin();
            runner
                .run(stdin.lock(), &mut out)
                .context("failed to run script from stdin")?;
        }
    }
    Ok(())
}
