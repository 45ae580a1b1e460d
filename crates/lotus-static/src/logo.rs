//! Lotus logo SVG.
//!
//! The flower is two rings of eight ellipse petals around a pair of
//! concentric center circles. Geometry is fixed; only the petal rotations
//! are derived, from the ring's angular step.

/// Number of petals in each ring.
pub const PETALS_PER_RING: usize = 8;

/// Logo canvas size in pixels (square).
pub const LOGO_SIZE: u32 = 200;

/// A ring of identical petals rotated around the flower center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalRing {
    /// Vertical offset of each petal center from the flower center
    pub cy: i32,

    /// Horizontal petal radius
    pub rx: u32,

    /// Vertical petal radius
    pub ry: u32,

    /// Opacity applied to the whole ring
    pub opacity: f32,

    /// Rotation of the first petal in degrees
    pub phase: f64,
}

/// Large petals, first petal pointing straight up.
pub const OUTER_RING: PetalRing = PetalRing {
    cy: -45,
    rx: 12,
    ry: 35,
    opacity: 0.8,
    phase: 0.0,
};

/// Small petals, offset by half a step so they sit between the outer ones.
pub const INNER_RING: PetalRing = PetalRing {
    cy: -30,
    rx: 10,
    ry: 25,
    opacity: 0.9,
    phase: 360.0 / (PETALS_PER_RING * 2) as f64,
};

impl PetalRing {
    /// Angular distance between neighbouring petals.
    pub fn step() -> f64 {
        360.0 / PETALS_PER_RING as f64
    }

    /// Rotation of every petal in the ring, in degrees.
    pub fn angles(&self) -> impl Iterator<Item = f64> + '_ {
        (0..PETALS_PER_RING).map(move |i| self.phase + Self::step() * i as f64)
    }

    /// Render the ring as an SVG group.
    fn render(&self, label: &str) -> String {
        let petals: Vec<String> = self
            .angles()
            .map(|angle| {
                format!(
                    r#"      <ellipse cx="0" cy="{}" rx="{}" ry="{}" transform="rotate({})"/>"#,
                    self.cy, self.rx, self.ry, angle
                )
            })
            .collect();

        format!(
            "    <!-- {} -->\n    <g fill=\"url(#lotusGradient)\" opacity=\"{}\">\n{}\n    </g>\n\n",
            label,
            self.opacity,
            petals.join("\n")
        )
    }
}

/// Build the lotus logo SVG document.
pub fn build_logo_svg() -> String {
    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
{defs}
  <g transform="translate({center},{center})">
"#,
        size = LOGO_SIZE,
        center = LOGO_SIZE / 2,
        defs = DEFS,
    );

    svg.push_str(&OUTER_RING.render("Outer petals"));
    svg.push_str(&INNER_RING.render("Inner petals"));
    svg.push_str(CENTER);
    svg.push_str("  </g>\n</svg>\n");

    svg
}

const DEFS: &str = r#"  <defs>
    <linearGradient id="lotusGradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:#0ea5e9;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#1e293b;stop-opacity:1" />
    </linearGradient>
    <radialGradient id="centerGradient" cx="50%" cy="50%" r="50%">
      <stop offset="0%" style="stop-color:#fbbf24;stop-opacity:1" />
      <stop offset="100%" style="stop-color:#f59e0b;stop-opacity:1" />
    </radialGradient>
  </defs>
"#;

const CENTER: &str = r##"    <!-- Center -->
    <circle cx="0" cy="0" r="15" fill="url(#centerGradient)"/>
    <circle cx="0" cy="0" r="8" fill="#fbbf24" opacity="0.8"/>
"##;
