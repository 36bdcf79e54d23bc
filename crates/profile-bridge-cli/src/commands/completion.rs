use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io::Write;

/// Write the completion script for `shell` to `out`
pub fn execute(shell: Shell, cmd: &mut Command, out: &mut dyn Write) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    tracing::debug!("Generating {} completions for {}", shell, bin_name);

    generate(shell, cmd, bin_name, out);
    out.flush()?;
    Ok(())
}
