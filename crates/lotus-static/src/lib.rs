//! Static brand asset generator.
//!
//! Builds the lotus logo SVG, an HTML wrapper for exporting it as PNG, and the
//! OGP image template. Rasterization is left to the operator's browser.

pub mod builder;
pub mod logo;
pub mod templates;

pub use builder::{
    export_wrapper_path, write_text_file, AssetGenerator, GenerateConfig, GenerateError,
    GenerateResult,
};
pub use logo::build_logo_svg;
pub use templates::{
    build_logo_export_wrapper, build_ogp_svg, build_ogp_template, OgpSettings, TemplateEngine,
};
