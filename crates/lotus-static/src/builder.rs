//! Asset generation run.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::logo::build_logo_svg;
use crate::templates::{OgpSettings, TemplateEngine, OGP_HEIGHT, OGP_WIDTH};

/// File name of the logo SVG.
pub const LOGO_SVG: &str = "logo.svg";

/// File name the operator saves the exported logo to.
pub const LOGO_PNG: &str = "logo.png";

/// File name of the OGP image template.
pub const OGP_TEMPLATE: &str = "ogp-generator.html";

/// File name the operator saves the OGP screenshot to.
pub const OGP_IMAGE: &str = "og-image.png";

/// File name of the standalone OGP preview card.
pub const OGP_SVG: &str = "og-image.svg";

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory receiving the generated files. Must already exist.
    pub output_dir: PathBuf,

    /// OGP template settings
    pub ogp: OgpSettings,

    /// Also write the standalone OGP preview card SVG
    pub ogp_svg: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public/assets"),
            ogp: OgpSettings::default(),
            ogp_svg: false,
        }
    }
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Written logo SVG
    pub logo_svg: PathBuf,

    /// Written logo export wrapper
    pub logo_html: PathBuf,

    /// Written OGP image template
    pub ogp_html: PathBuf,

    /// Written OGP preview card, when requested
    pub ogp_svg: Option<PathBuf>,

    /// Where the operator should save the exported logo
    pub logo_png: PathBuf,

    /// Where the operator should save the OGP screenshot
    pub og_image: PathBuf,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

impl GenerateResult {
    /// Files written by the run, in write order.
    pub fn written(&self) -> Vec<&Path> {
        let mut paths = vec![
            self.logo_svg.as_path(),
            self.logo_html.as_path(),
            self.ogp_html.as_path(),
        ];
        paths.extend(self.ogp_svg.as_deref());
        paths
    }

    /// Manual export steps for the operator.
    pub fn instructions(&self) -> String {
        let mut text = format!(
            r#"=== INSTRUCTIONS ===
1. For Logo (PNG):
   - Open: {logo_html}
   - Right-click on the lotus logo and 'Save image as...'
   - Save as: {logo_png}

2. For OGP Image (PNG):
   - Open: {ogp_html}
   - Take a screenshot at {w}x{h} resolution
   - Save as: {og_image}

Alternative: Use browser developer tools to set viewport to {w}x{h} and screenshot"#,
            logo_html = self.logo_html.display(),
            logo_png = self.logo_png.display(),
            ogp_html = self.ogp_html.display(),
            og_image = self.og_image.display(),
            w = OGP_WIDTH,
            h = OGP_HEIGHT,
        );

        if let Some(svg) = &self.ogp_svg {
            text.push_str(&format!(
                "\n\n3. For the OGP SVG card:\n   - Convert {} to PNG in a browser or converter\n   - Save as: {}",
                svg.display(),
                self.og_image.display(),
            ));
        }

        text
    }
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Invalid {field} setting {value:?}: quotes, backslashes, angle brackets and line breaks are not allowed")]
    InvalidSetting { field: &'static str, value: String },
}

/// Write `content` to `path` as UTF-8, replacing any existing file.
///
/// The parent directory is not created; a missing directory is an error.
pub fn write_text_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

/// Path of the HTML wrapper used to export the image at `png_path`.
pub fn export_wrapper_path(png_path: &Path) -> PathBuf {
    png_path.with_extension("html")
}

/// Brand asset generator.
pub struct AssetGenerator {
    config: GenerateConfig,
    templates: TemplateEngine,
}

impl AssetGenerator {
    /// Create a new generator.
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Generate the logo SVG, its export wrapper and the OGP template.
    ///
    /// Settings are checked before anything is written. After that the run
    /// stops at the first failure and files already written are left in place.
    pub fn generate(&self) -> Result<GenerateResult, GenerateError> {
        let start = Instant::now();
        let dir = &self.config.output_dir;

        self.config.ogp.check_urls()?;

        tracing::info!("Creating lotus logo...");
        let svg = build_logo_svg();
        let logo_svg = dir.join(LOGO_SVG);
        write_output(&logo_svg, &svg)?;
        tracing::info!("SVG logo saved at: {}", logo_svg.display());

        let logo_png = dir.join(LOGO_PNG);
        let logo_html = export_wrapper_path(&logo_png);
        let wrapper = self
            .templates
            .render_logo_page(&svg)
            .map_err(|e| GenerateError::Template(e.to_string()))?;
        write_output(&logo_html, &wrapper)?;
        tracing::info!("HTML file created at: {}", logo_html.display());

        tracing::info!("Creating OGP image template...");
        let ogp = self
            .templates
            .render_ogp(&self.config.ogp)
            .map_err(|e| GenerateError::Template(e.to_string()))?;
        let ogp_html = dir.join(OGP_TEMPLATE);
        write_output(&ogp_html, &ogp)?;
        tracing::info!("OGP HTML template saved at: {}", ogp_html.display());

        let ogp_svg = if self.config.ogp_svg {
            let card = self
                .templates
                .render_ogp_svg(&self.config.ogp)
                .map_err(|e| GenerateError::Template(e.to_string()))?;
            let path = dir.join(OGP_SVG);
            write_output(&path, &card)?;
            tracing::info!("OGP SVG created at: {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(GenerateResult {
            logo_svg,
            logo_html,
            ogp_html,
            ogp_svg,
            logo_png,
            og_image: dir.join(OGP_IMAGE),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

fn write_output(path: &Path, content: &str) -> Result<(), GenerateError> {
    tracing::debug!("Writing {} bytes to {}", content.len(), path.display());

    write_text_file(path, content).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{build_logo_export_wrapper, build_ogp_svg, build_ogp_template};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn generator(dir: &Path) -> AssetGenerator {
        AssetGenerator::new(GenerateConfig {
            output_dir: dir.to_path_buf(),
            ..Default::default()
        })
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn writes_three_files_matching_builders() {
        let temp = tempdir().unwrap();

        let result = generator(temp.path()).generate().unwrap();

        assert_eq!(
            file_names(temp.path()),
            vec!["logo.html", "logo.svg", "ogp-generator.html"]
        );

        let svg = build_logo_svg();
        let expected = [
            (temp.path().join("logo.svg"), svg.clone()),
            (
                temp.path().join("logo.html"),
                build_logo_export_wrapper(&svg).unwrap(),
            ),
            (
                temp.path().join("ogp-generator.html"),
                build_ogp_template(&OgpSettings::default()).unwrap(),
            ),
        ];

        for (path, content) in &expected {
            let written = fs::read_to_string(path).unwrap();
            assert!(!written.is_empty());
            assert_eq!(&written, content);
        }

        assert_eq!(result.written()[1], temp.path().join("logo.html").as_path());
    }

    #[test]
    fn fails_on_missing_directory() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing");

        let err = generator(&missing).generate().unwrap_err();

        match err {
            GenerateError::Write { path, source } => {
                assert_eq!(path, missing.join("logo.svg"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!missing.exists());
        assert!(file_names(temp.path()).is_empty());
    }

    #[test]
    fn overwrites_on_rerun() {
        let temp = tempdir().unwrap();
        let assets = generator(temp.path());

        assets.generate().unwrap();
        let first: Vec<String> = ["logo.svg", "logo.html", "ogp-generator.html"]
            .iter()
            .map(|n| fs::read_to_string(temp.path().join(n)).unwrap())
            .collect();

        assets.generate().unwrap();
        let second: Vec<String> = ["logo.svg", "logo.html", "ogp-generator.html"]
            .iter()
            .map(|n| fs::read_to_string(temp.path().join(n)).unwrap())
            .collect();

        assert_eq!(first, second);
        assert_eq!(file_names(temp.path()).len(), 3);
    }

    #[test]
    fn truncates_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("note.txt");

        write_text_file(&path, "a much longer first version").unwrap();
        write_text_file(&path, "short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn derives_wrapper_path_from_png() {
        assert_eq!(
            export_wrapper_path(Path::new("/srv/assets/logo.png")),
            PathBuf::from("/srv/assets/logo.html")
        );
        assert_eq!(
            export_wrapper_path(Path::new("my.png.dir/logo.png")),
            PathBuf::from("my.png.dir/logo.html")
        );
    }

    #[test]
    fn uses_custom_ogp_settings() {
        let temp = tempdir().unwrap();
        let assets = AssetGenerator::new(GenerateConfig {
            output_dir: temp.path().to_path_buf(),
            ogp: OgpSettings {
                title: "Sage".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });

        assets.generate().unwrap();

        let html = fs::read_to_string(temp.path().join("ogp-generator.html")).unwrap();
        assert!(html.contains(r#"<h1 class="main-title">Sage</h1>"#));
    }

    #[test]
    fn instructions_name_every_path() {
        let temp = tempdir().unwrap();

        let result = generator(temp.path()).generate().unwrap();
        let text = result.instructions();

        assert!(text.starts_with("=== INSTRUCTIONS ==="));
        assert!(text.contains(&format!("Open: {}", result.logo_html.display())));
        assert!(text.contains(&format!("Save as: {}", result.logo_png.display())));
        assert!(text.contains(&format!("Open: {}", result.ogp_html.display())));
        assert!(text.contains(&format!("Save as: {}", result.og_image.display())));
        assert!(text.contains("1200x630"));
        assert!(!result.logo_png.exists());
        assert!(!result.og_image.exists());
    }

    #[test]
    fn writes_ogp_svg_when_requested() {
        let temp = tempdir().unwrap();
        let assets = AssetGenerator::new(GenerateConfig {
            output_dir: temp.path().to_path_buf(),
            ogp_svg: true,
            ..Default::default()
        });

        let result = assets.generate().unwrap();

        assert_eq!(
            file_names(temp.path()),
            vec!["logo.html", "logo.svg", "og-image.svg", "ogp-generator.html"]
        );
        assert_eq!(
            fs::read_to_string(temp.path().join("og-image.svg")).unwrap(),
            build_ogp_svg(&OgpSettings::default()).unwrap()
        );
        assert_eq!(result.written().len(), 4);
        assert!(result.instructions().contains("3. For the OGP SVG card:"));
    }

    #[test]
    fn skips_ogp_svg_by_default() {
        let temp = tempdir().unwrap();

        let result = generator(temp.path()).generate().unwrap();

        assert!(result.ogp_svg.is_none());
        assert!(!temp.path().join("og-image.svg").exists());
        assert!(!result.instructions().contains("OGP SVG"));
    }

    #[test]
    fn rejects_unsafe_background_before_writing() {
        let temp = tempdir().unwrap();
        let assets = AssetGenerator::new(GenerateConfig {
            output_dir: temp.path().to_path_buf(),
            ogp: OgpSettings {
                background: "bg.jpg');}</style><script>".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });

        let err = assets.generate().unwrap_err();

        assert!(matches!(
            err,
            GenerateError::InvalidSetting { field: "background", .. }
        ));
        assert!(file_names(temp.path()).is_empty());
    }
}
