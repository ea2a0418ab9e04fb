use std::io::{self, Write};

use lazy_seq::{
    GeneratorHandle, random_sequence,
    report::{START_MESSAGE, write_transcript},
};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{START_MESSAGE}")?;

    let mut generator = GeneratorHandle::new(random_sequence());
    write_transcript(&mut generator, &mut out)?;
    out.flush()?;

    tracing::debug!(emitted = generator.emitted(), "sequence finished");
    Ok(())
}

/// Logs go to stderr so stdout carries only the sequence. Verbosity comes
/// from `RUST_LOG` and defaults to warnings.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
