use anyhow::Context;
use patterns_showcase::{demo, DemoConfig};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the demo text
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = DemoConfig::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&config, &mut out).context("design pattern demo failed")?;
    Ok(())
}
