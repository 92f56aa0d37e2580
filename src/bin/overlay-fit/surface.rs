//! Measurable geometry for the configured fit target.

use overlay_fit::{FitTarget, Measurable, Overlay, select_target};

/// Snapshot of the rendered overlay geometry the scaler measures.
///
/// Built fresh for each measurement from the manifest and whatever is known
/// about the decoded image; holds no references into the app state.
pub struct OverlaySurface {
    /// Layout box of the fit target; zero while the size is still unknown
    layout: [f32; 2],
    /// Border + shadow extent of the target, per side
    chrome: f32,
    /// Union extent of all regions, the scroll-size analog
    content: [f32; 2],
    /// Active uniform transform
    scale: f32,
}

impl OverlaySurface {
    /// `image_size` is the decoded overlay image when available; the root
    /// surface falls back to it when the manifest carries no design size.
    pub fn new(
        overlay: &Overlay,
        image_size: Option<[u32; 2]>,
        priority: &[&str],
        scale: f32,
    ) -> Self {
        let image = image_size.map(|[w, h]| [w as f32, h as f32]);

        let (layout, chrome) = match select_target(overlay, priority) {
            FitTarget::Region(region) => (region.size, region.border + region.shadow),
            FitTarget::Root(overlay) => {
                (overlay.design_size.or(image).unwrap_or([0.0, 0.0]), 0.0)
            }
        };

        let mut content = [0.0f32, 0.0];
        for region in &overlay.regions {
            let extent = region.extent();
            content = [content[0].max(extent[0]), content[1].max(extent[1])];
        }
        if content == [0.0, 0.0] {
            content = image.unwrap_or(layout);
        }

        Self {
            layout,
            chrome,
            content,
            scale,
        }
    }
}

impl Measurable for OverlaySurface {
    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn bounding_size(&self) -> [f32; 2] {
        if self.layout[0] <= 0.0 || self.layout[1] <= 0.0 {
            return [0.0, 0.0];
        }
        [
            (self.layout[0] + 2.0 * self.chrome) * self.scale,
            (self.layout[1] + 2.0 * self.chrome) * self.scale,
        ]
    }

    fn scroll_size(&self) -> [f32; 2] {
        self.content
    }
}
