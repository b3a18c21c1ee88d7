//! Completions command

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, CommandFactory};
use clap_complete::{generate, generate_to, Shell};
use tracing::info;

use crate::cli::{output, Cli};

const BIN_NAME: &str = "kacl";

/// Generate shell completions
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory, named the way the shell expects
    /// (`kacl.bash`, `_kacl`, `kacl.fish`, ...), instead of printing it
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, dir = ?self.dir, "executing completions command");
        let mut cmd = Cli::command();

        let Some(dir) = &self.dir else {
            generate(self.shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
            return Ok(());
        };

        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create {}", dir.display()))?;
        let written = generate_to(self.shell, &mut cmd, BIN_NAME, dir)
            .with_context(|| format!("failed to write completions to {}", dir.display()))?;

        if !cli.quiet {
            output::success(&format!(
                "Completions written to {}",
                output::path_style().apply_to(written.display())
            ));
        }
        Ok(())
    }
}
