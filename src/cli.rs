// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::RingConfig;
use crate::error::SceneError;

#[derive(Parser, Debug, Clone)]
#[command(name = "ring-scene")]
#[command(about = "Generates a rainbow ring of cylinders as a ray tracer scene file", long_about = None)]
pub struct Cli {
    /// JSON file with ring parameters, flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Radius of the main circle
    #[arg(long, allow_hyphen_values = true)]
    pub radius: Option<f64>,

    /// Cylinder length (currently not written to the scene)
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<f64>,

    /// Number of cylinders around the circle, minus the closing one
    #[arg(long)]
    pub count: Option<u32>,

    /// Circle center as X,Y
    #[arg(long, value_parser = parse_center, allow_hyphen_values = true)]
    pub center: Option<[f64; 2]>,

    /// Scene file to write
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the scene to stdout instead of writing a file
    #[arg(long, default_value = "false")]
    pub stdout: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags
    pub fn resolve_config(&self) -> Result<RingConfig, SceneError> {
        let mut config = match &self.config {
            Some(path) => RingConfig::load(path)?,
            None => RingConfig::default(),
        };
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(center) = self.center {
            config.center = center;
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_center(value: &str) -> Result<[f64; 2], String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y (given '{}')", value))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid coordinate '{}': {}", part, err))
    };
    Ok([parse(x)?, parse(y)?])
}
