use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use ring_scene::cli::Cli;
use ring_scene::{generate_ring_scene, write_records, write_scene};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.resolve_config().context("Invalid ring parameters")?;
    let records = generate_ring_scene(&config)?;

    if cli.stdout {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let written = write_records(&mut out, records).context("Failed to write scene to stdout")?;
        out.flush()?;
        log::info!("Ring scene written to stdout: {} cylinders", written);
    } else {
        let written = write_scene(&config.output, records)
            .context(format!("Failed to generate scene: {:?}", config.output))?;
        log::info!(
            "Ring scene written to {:?}: {} cylinders, radius {}",
            config.output,
            written,
            config.radius
        );
    }

    Ok(())
}
