use anyhow::{Context, Result, anyhow};
use profile_bridge_writer::{JsonLinesSink, ProfileWriter, replay_file};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Replay an import bundle and write its notifications as JSON lines
pub fn execute(file: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    tracing::info!("Replaying import bundle: {}", file.display());

    let emitted = match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let (emitted, _) = replay_into(file, BufWriter::new(out), pretty)?;
            tracing::info!("Wrote notifications to {}", path.display());
            emitted
        }
        None => replay_into(file, io::stdout().lock(), pretty)?.0,
    };

    tracing::info!("Emitted {} notification(s)", emitted);
    Ok(())
}

/// Replay `file` into a JSON-lines sink over `writer`, handing the writer back
pub fn replay_into<W: Write + 'static>(file: &Path, writer: W, pretty: bool) -> Result<(usize, W)> {
    let sink = Arc::new(JsonLinesSink::new(writer).pretty(pretty));

    let mut profile_writer = ProfileWriter::new();
    profile_writer.initialize(&sink);

    let emitted = replay_file(file, &profile_writer)
        .with_context(|| format!("Failed to replay {}", file.display()))?;
    profile_writer.detach();

    let sink = Arc::try_unwrap(sink).map_err(|_| anyhow!("Notification sink is still shared"))?;
    Ok((emitted, sink.into_inner()?))
}
