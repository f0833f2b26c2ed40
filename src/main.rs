use anyhow::{Context, Result};
use clap::Parser;
use golgrid::{view, Settings, View};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::parse();
    let mut engine = settings
        .build_engine()
        .context("invalid simulation settings")?;
    info!(side = engine.side(), "starting session");

    let engine = if settings.headless {
        engine.run(settings.iterations);
        engine
    } else {
        View::new(engine, settings.iterations, settings.speed).run()?
    };

    if settings.headless {
        println!("{}", view::grid_text(engine.grid()));
    }
    println!("{}", view::status_line(&engine, settings.iterations));
    Ok(())
}
