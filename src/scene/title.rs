use glam::Vec3;
use serde::Serialize;

use crate::options::TitleOptions;

/// Which of the two fixed title placements is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TitleLayout {
    /// Landscape canvases (`aspect > wide_aspect`): larger, left of center.
    Wide,
    /// Everything else: smaller and nearer the middle.
    Narrow,
}

impl TitleLayout {
    /// Pick the layout for a canvas aspect ratio.
    #[must_use]
    pub fn for_aspect(aspect: f32, wide_aspect: f32) -> Self {
        if aspect > wide_aspect {
            Self::Wide
        } else {
            Self::Narrow
        }
    }

    /// Anchor position of the extruded text.
    #[must_use]
    pub fn position(self) -> Vec3 {
        match self {
            Self::Wide => Vec3::new(-1.42, 0.25, -2.9),
            Self::Narrow => Vec3::new(-0.5, 0.43, -2.9),
        }
    }

    /// Glyph size.
    #[must_use]
    pub fn size(self) -> f32 {
        match self {
            Self::Wide => 0.22,
            Self::Narrow => 0.15,
        }
    }
}

/// Extrusion and material parameters forwarded to the host's text mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleStyle {
    /// Typeface JSON path.
    pub font: String,
    /// Extrusion depth.
    pub height: f32,
    /// Curve tessellation segments.
    pub curve_segments: u32,
    /// Bevel thickness.
    pub bevel_thickness: f32,
    /// Bevel size.
    pub bevel_size: f32,
    /// Bevel tessellation segments.
    pub bevel_segments: u32,
    /// White Phong material shininess.
    pub shininess: f32,
}

/// The extruded title text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleMesh {
    /// Text content; contains a line break only for canvases strictly
    /// narrower than `wide_aspect`.
    pub text: String,
    /// Selected layout branch.
    pub layout: TitleLayout,
    /// World-space anchor.
    pub position: Vec3,
    /// Glyph size.
    pub size: f32,
    /// Extrusion/material style.
    pub style: TitleStyle,
}

/// Build the title for a canvas aspect ratio.
#[must_use]
pub fn build_title(aspect: f32, options: &TitleOptions) -> TitleMesh {
    let layout = TitleLayout::for_aspect(aspect, options.wide_aspect);
    // Placement and line break use separate comparisons: a canvas exactly
    // at `wide_aspect` gets the narrow placement with single-line text.
    let text = if aspect < options.wide_aspect {
        format!("{} \n {}", options.lead, options.tail)
    } else {
        format!("{} {}", options.lead, options.tail)
    };
    TitleMesh {
        text,
        layout,
        position: layout.position(),
        size: layout.size(),
        style: TitleStyle {
            font: options.font.clone(),
            height: options.height,
            curve_segments: options.curve_segments,
            bevel_thickness: options.bevel_thickness,
            bevel_size: options.bevel_size,
            bevel_segments: options.bevel_segments,
            shininess: options.shininess,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::aspect_ratio;

    #[test]
    fn wide_canvas_gets_single_line() {
        let title = build_title(1.5, &TitleOptions::default());
        assert_eq!(title.layout, TitleLayout::Wide);
        assert_eq!(title.text, "Immerse the Bay");
        assert_eq!(title.position, Vec3::new(-1.42, 0.25, -2.9));
        assert_eq!(title.size, 0.22);
        assert_eq!(title.text.lines().count(), 1);
    }

    #[test]
    fn narrow_canvas_breaks_line() {
        let title = build_title(1.0, &TitleOptions::default());
        assert_eq!(title.layout, TitleLayout::Narrow);
        assert_eq!(title.position, Vec3::new(-0.5, 0.43, -2.9));
        assert_eq!(title.size, 0.15);
        assert_eq!(title.text.lines().count(), 2);
        assert!(title.text.starts_with("Immerse"));
        assert!(title.text.ends_with("the Bay"));
    }

    #[test]
    fn threshold_aspect_is_narrow_single_line() {
        let aspect = aspect_ratio(Some(700), Some(500));
        assert_eq!(aspect, 1.4);
        let title = build_title(aspect, &TitleOptions::default());
        assert_eq!(title.layout, TitleLayout::Narrow);
        assert_eq!(title.position, Vec3::new(-0.5, 0.43, -2.9));
        assert_eq!(title.size, 0.15);
        assert_eq!(title.text, "Immerse the Bay");
    }

    #[test]
    fn style_is_copied_from_options() {
        let title = build_title(2.0, &TitleOptions::default());
        assert_eq!(title.style.font, "/fonts/Orbitron_Regular.json");
        assert_eq!(title.style.bevel_segments, 8);
        assert_eq!(title.style.shininess, 100.0);
    }
}
