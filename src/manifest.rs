use serde::{Deserialize, Serialize};

/// A fixed-layout overlay loaded from a RON manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    /// Display name of the overlay
    pub name: String,
    /// Overlay author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Link to the author's page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    /// Path of the overlay image, relative to the manifest (or an embedded
    /// asset key for the bundled default)
    pub image_path: String,
    /// Design-time surface size in logical pixels; measured from the decoded
    /// image when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_size: Option<[f32; 2]>,
    /// Named layout regions within the surface
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<Region>,
}

/// A named rectangular region within the overlay surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Region name, matched against the fit-target priority list
    pub name: String,
    /// Offset of the region's layout box within the surface
    pub offset: [f32; 2],
    /// Layout box size
    pub size: [f32; 2],
    /// Border width drawn outside the layout box
    #[serde(default)]
    pub border: f32,
    /// Shadow extent outside the border
    #[serde(default)]
    pub shadow: f32,
}

impl Overlay {
    /// Minimal overlay used when no manifest can be loaded at all. Plays the
    /// same role as falling back to the document root: a target always exists.
    pub fn fallback() -> Self {
        Self {
            name: "overlay".to_owned(),
            author: None,
            author_link: None,
            image_path: "overlay.png".to_owned(),
            design_size: None,
            regions: Vec::new(),
        }
    }
}

impl Region {
    /// Rendered bounding size: the layout box widened by border and shadow
    /// chrome on every side.
    pub fn bounding_size(&self) -> [f32; 2] {
        let chrome = 2.0 * (self.border + self.shadow);
        [self.size[0] + chrome, self.size[1] + chrome]
    }

    /// Far corner of the chrome box within the surface.
    pub fn extent(&self) -> [f32; 2] {
        let chrome = self.border + self.shadow;
        [
            self.offset[0] + self.size[0] + chrome,
            self.offset[1] + self.size[1] + chrome,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_manifest_with_defaulted_chrome() {
        let source = r#"
            Overlay(
                name: "panel",
                image_path: "panel.png",
                design_size: Some((400.0, 300.0)),
                regions: [
                    Region(name: "body", offset: (0.0, 0.0), size: (400.0, 300.0)),
                    Region(name: "screen", offset: (10.0, 40.0), size: (380.0, 250.0), border: 2.0),
                ],
            )
        "#;

        let overlay: Overlay = ron::from_str(source).unwrap();
        assert_eq!(overlay.name, "panel");
        assert_eq!(overlay.design_size, Some([400.0, 300.0]));
        assert_eq!(overlay.regions.len(), 2);
        assert_eq!(overlay.regions[0].border, 0.0);
        assert_eq!(overlay.regions[1].border, 2.0);
        assert_eq!(overlay.author, None);
    }

    #[test]
    fn bounding_size_includes_chrome_on_both_sides() {
        let region = Region {
            name: "body".to_owned(),
            offset: [10.0, 20.0],
            size: [100.0, 50.0],
            border: 3.0,
            shadow: 2.0,
        };

        assert_eq!(region.bounding_size(), [110.0, 60.0]);
        assert_eq!(region.extent(), [115.0, 75.0]);
    }

    #[test]
    fn fallback_overlay_has_no_regions() {
        let overlay = Overlay::fallback();
        assert!(overlay.regions.is_empty());
        assert_eq!(overlay.design_size, None);
    }
}
