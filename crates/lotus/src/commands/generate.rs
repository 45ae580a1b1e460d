//! Asset generation command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lotus_static::{AssetGenerator, GenerateConfig, OgpSettings};
use serde::Deserialize;

/// Configuration file structure (lotus.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    ogp: OgpSettings,
}

#[derive(Debug, Deserialize, Default)]
struct OutputConfig {
    dir: Option<String>,
}

/// Values given on the command line, taking precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub output: Option<PathBuf>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub ogp_svg: bool,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Merge command-line overrides over the config file.
pub(crate) fn resolve(file_config: ConfigFile, overrides: Overrides) -> GenerateConfig {
    let defaults = GenerateConfig::default();

    let output_dir = overrides
        .output
        .or_else(|| file_config.output.dir.map(PathBuf::from))
        .unwrap_or(defaults.output_dir);

    let mut ogp = file_config.ogp;
    if let Some(title) = overrides.title {
        ogp.title = title;
    }
    if let Some(subtitle) = overrides.subtitle {
        ogp.subtitle = subtitle;
    }

    GenerateConfig {
        output_dir,
        ogp,
        ogp_svg: overrides.ogp_svg,
    }
}

/// Run the generate command.
pub fn run(config_path: &Path, overrides: Overrides) -> Result<()> {
    let config = resolve(load_config(config_path)?, overrides);

    tracing::info!("Generating assets into {}", config.output_dir.display());

    let result = AssetGenerator::new(config).generate()?;

    tracing::info!(
        "Wrote {} files in {}ms",
        result.written().len(),
        result.duration_ms
    );

    println!();
    println!("{}", result.instructions());

    Ok(())
}
