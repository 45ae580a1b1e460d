//! HTML and SVG templates for manual image export.

use minijinja::{context, AutoEscape, Environment};
use serde::Deserialize;

use crate::builder::GenerateError;

/// OGP image width in pixels.
pub const OGP_WIDTH: u32 = 1200;

/// OGP image height in pixels.
pub const OGP_HEIGHT: u32 = 630;

/// Variable parts of the OGP image template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OgpSettings {
    /// Main headline
    pub title: String,

    /// Line under the headline
    pub subtitle: String,

    /// Background image URL, relative to ogp-generator.html
    pub background: String,

    /// Remote web font stylesheet
    pub font_stylesheet: String,
}

impl Default for OgpSettings {
    fn default() -> Self {
        Self {
            title: "聖者の愛（AI）".to_string(),
            subtitle: "スピリチュアル・人生相談AI".to_string(),
            background: "../dist/assets/nature-background-ICtu82nj.jpg".to_string(),
            font_stylesheet:
                "https://fonts.googleapis.com/css2?family=Noto+Sans+JP:wght@400;500;700&display=swap"
                    .to_string(),
        }
    }
}

/// Characters that would end the CSS `url('...')` string or the `<style>` block.
const FORBIDDEN_URL_CHARS: &[char] = &['\'', '"', '\\', '<', '>', '\n', '\r'];

impl OgpSettings {
    /// Reject URLs that cannot be embedded in the OGP stylesheet unescaped.
    pub fn check_urls(&self) -> Result<(), GenerateError> {
        for (field, value) in [
            ("background", &self.background),
            ("font_stylesheet", &self.font_stylesheet),
        ] {
            if value.contains(FORBIDDEN_URL_CHARS) {
                return Err(GenerateError::InvalidSetting {
                    field,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the export templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|name| {
            if name.ends_with(".svg") {
                AutoEscape::Html
            } else {
                minijinja::default_auto_escape_callback(name)
            }
        });

        env.add_template("logo.html", LOGO_PAGE_TEMPLATE)
            .expect("Failed to add logo page template");

        env.add_template("ogp.html", OGP_TEMPLATE)
            .expect("Failed to add OGP template");

        env.add_template("og-image.svg", OGP_SVG_TEMPLATE)
            .expect("Failed to add OGP SVG template");

        Self { env }
    }

    /// Render the page wrapping the logo SVG for right-click export.
    ///
    /// The SVG is embedded as-is, without escaping or validation.
    pub fn render_logo_page(&self, svg: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("logo.html")?;

        tmpl.render(context! {
            svg => svg,
        })
    }

    /// Render the OGP image page.
    pub fn render_ogp(&self, settings: &OgpSettings) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("ogp.html")?;

        tmpl.render(context! {
            width => OGP_WIDTH,
            height => OGP_HEIGHT,
            title => &settings.title,
            subtitle => &settings.subtitle,
            background => &settings.background,
            font_stylesheet => &settings.font_stylesheet,
        })
    }

    /// Render the self-contained OGP preview card as SVG.
    pub fn render_ogp_svg(&self, settings: &OgpSettings) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("og-image.svg")?;

        tmpl.render(context! {
            width => OGP_WIDTH,
            height => OGP_HEIGHT,
            center => OGP_WIDTH / 2,
            title => &settings.title,
            subtitle => &settings.subtitle,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the HTML export wrapper around an SVG document.
pub fn build_logo_export_wrapper(svg: &str) -> Result<String, minijinja::Error> {
    TemplateEngine::new().render_logo_page(svg)
}

/// Build the OGP image template.
pub fn build_ogp_template(settings: &OgpSettings) -> Result<String, minijinja::Error> {
    TemplateEngine::new().render_ogp(settings)
}

/// Build the OGP preview card as a standalone SVG.
///
/// Unlike the HTML template it references no background image or web font.
pub fn build_ogp_svg(settings: &OgpSettings) -> Result<String, minijinja::Error> {
    TemplateEngine::new().render_ogp_svg(settings)
}

const LOGO_PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Lotus Logo</title>
    <style>
        body { margin: 0; padding: 20px; background: white; }
        .logo { width: 200px; height: 200px; }
    </style>
</head>
<body>
    <div class="logo">
        {{ svg | safe }}
    </div>
    <script>
        // Right-click the SVG and save it as an image.
        console.log('Logo generated. Right-click to save as PNG.');
    </script>
</body>
</html>
"##;

// @import must precede every other rule or browsers drop it.
const OGP_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>OGP Image Generator</title>
    <style>
        @import url('{{ font_stylesheet | safe }}');

        body {
            margin: 0;
            padding: 0;
            font-family: 'Noto Sans JP', sans-serif;
        }

        .ogp-container {
            width: {{ width }}px;
            height: {{ height }}px;
            position: relative;
            background-image: url('{{ background | safe }}');
            background-size: cover;
            background-position: center;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
        }

        .overlay {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            bottom: 0;
            background: linear-gradient(
                135deg,
                rgba(30, 41, 59, 0.7) 0%,
                rgba(14, 165, 233, 0.3) 100%
            );
        }

        .content {
            position: relative;
            z-index: 2;
            text-align: center;
            color: white;
            text-shadow: 2px 2px 4px rgba(0,0,0,0.5);
        }

        .main-title {
            font-size: 72px;
            font-weight: bold;
            margin: 0 0 20px 0;
            background: linear-gradient(135deg, #0ea5e9, #1e293b);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
            text-shadow: none;
            filter: drop-shadow(2px 2px 4px rgba(0,0,0,0.5));
        }

        .subtitle {
            font-size: 36px;
            font-weight: 500;
            margin: 0;
            color: #f1f5f9;
            letter-spacing: 2px;
        }
    </style>
</head>
<body>
    <div class="ogp-container">
        <div class="overlay"></div>
        <div class="content">
            <h1 class="main-title">{{ title }}</h1>
            <p class="subtitle">{{ subtitle }}</p>
        </div>
    </div>

    <script>
        console.log('OGP image template generated.');
        console.log('Screenshot this page at {{ width }}x{{ height }} resolution for the OGP image.');

        document.querySelector('meta[name="viewport"]')?.remove();
        const viewport = document.createElement('meta');
        viewport.name = 'viewport';
        viewport.content = 'width={{ width }},height={{ height }},initial-scale=1';
        document.head.appendChild(viewport);
    </script>
</body>
</html>
"##;

const OGP_SVG_TEMPLATE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{{ width }}" height="{{ height }}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="bgGradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#1e293b;stop-opacity:0.7" />
      <stop offset="100%" style="stop-color:#0ea5e9;stop-opacity:0.3" />
    </linearGradient>
    <linearGradient id="textGradient" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:#0ea5e9" />
      <stop offset="100%" style="stop-color:#1e293b" />
    </linearGradient>
  </defs>

  <!-- Background -->
  <rect width="{{ width }}" height="{{ height }}" fill="#1e293b"/>
  <rect width="{{ width }}" height="{{ height }}" fill="url(#bgGradient)"/>

  <!-- Decorative circles -->
  <circle cx="100" cy="100" r="50" fill="#0ea5e9" opacity="0.1"/>
  <circle cx="1100" cy="530" r="80" fill="#0ea5e9" opacity="0.08"/>
  <circle cx="200" cy="500" r="30" fill="#fbbf24" opacity="0.15"/>

  <text x="{{ center }}" y="280" text-anchor="middle" fill="url(#textGradient)"
        font-family="Arial, sans-serif" font-size="72" font-weight="bold">{{ title }}</text>
  <text x="{{ center }}" y="350" text-anchor="middle" fill="#f1f5f9"
        font-family="Arial, sans-serif" font-size="36" font-weight="normal">{{ subtitle }}</text>

  <path d="M 500 400 Q 600 420 700 400" stroke="#0ea5e9" stroke-width="2" fill="none" opacity="0.6"/>
</svg>
"##;
