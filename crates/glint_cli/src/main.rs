//! Glint command-line renderer.
//!
//! Usage: glint [ENVMAP] [OUTPUT] [--config FILE]
//!
//! Renders the reference scene against ENVMAP (default `res/envmap.jpg`) and
//! writes OUTPUT (default `out.ppm`); the file extension picks the format.
//! FILE is a JSON object overriding any `RenderConfig` fields.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use glint_core::presets::reference_scene;
use glint_core::EnvironmentMap;
use glint_renderer::{render, RenderConfig};

const DEFAULT_ENVMAP: &str = "res/envmap.jpg";
const DEFAULT_OUTPUT: &str = "out.ppm";

/// Parsed command-line arguments.
struct Args {
    envmap: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut positional = Vec::new();
        let mut config = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().context("--config needs a file path")?;
                    config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => bail!("Unknown option: {flag}"),
                _ => positional.push(arg),
            }
        }

        if positional.len() > 2 {
            bail!("Usage: glint [ENVMAP] [OUTPUT] [--config FILE]");
        }

        let mut positional = positional.into_iter();
        Ok(Self {
            envmap: PathBuf::from(positional.next().unwrap_or_else(|| DEFAULT_ENVMAP.into())),
            output: PathBuf::from(positional.next().unwrap_or_else(|| DEFAULT_OUTPUT.into())),
            config,
        })
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: RenderConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;

    log::info!("Loaded render config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse(env::args().skip(1))?;
    let config = load_config(args.config.as_ref())?;
    config.validate().context("Invalid render config")?;

    log::info!("Loading environment map {}", args.envmap.display());
    let environment = EnvironmentMap::load(&args.envmap).with_context(|| {
        format!("Can not load the environment map {}", args.envmap.display())
    })?;

    log::info!("Setting up scene");
    let scene = reference_scene().context("Failed to build reference scene")?;

    let image = render(&scene, &environment, &config)?;

    image
        .to_image()
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;
    log::info!("Saved {}", args.output.display());

    Ok(())
}
