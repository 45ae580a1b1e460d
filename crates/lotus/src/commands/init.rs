//! Write a default config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'lotus generate' to write the assets.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Lotus Configuration

[output]
# Existing directory receiving logo.svg, logo.html and ogp-generator.html
dir = "public/assets"

[ogp]
title = "聖者の愛（AI）"
subtitle = "スピリチュアル・人生相談AI"

# Relative to ogp-generator.html. Both URLs are embedded in CSS as-is and
# must not contain quotes, backslashes, angle brackets or line breaks.
background = "../dist/assets/nature-background-ICtu82nj.jpg"
font_stylesheet = "https://fonts.googleapis.com/css2?family=Noto+Sans+JP:wght@400;500;700&display=swap"
"#;
