//! Natural-size measurement for fit targets.

/// Natural (untransformed) size of the fit target.
///
/// Both dimensions are floored to 1 so ratio computations never divide by
/// zero or flip sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalSize {
    pub width: f32,
    pub height: f32,
}

impl NaturalSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

/// Geometry the scaler can measure.
///
/// Sizes are reported in the target's current transformed space; `scale` and
/// `set_scale` expose the active uniform transform so measurement can reset
/// it to identity and restore it afterwards.
pub trait Measurable {
    /// Active uniform scale transform.
    fn scale(&self) -> f32;
    fn set_scale(&mut self, scale: f32);
    /// Rendered bounding box, including border/shadow chrome.
    fn bounding_size(&self) -> [f32; 2];
    /// Content extent, unaffected by the transform. Used as the fallback
    /// when the bounding box is degenerate.
    fn scroll_size(&self) -> [f32; 2];
}

/// Measures the target with its transform reset to identity.
///
/// The prior transform is restored before returning, in the same synchronous
/// pass, so the reset is never rendered. Each axis falls back to the scroll
/// size when the bounding box reads zero there.
pub fn natural_size(target: &mut dyn Measurable) -> NaturalSize {
    let prev = target.scale();
    target.set_scale(1.0);
    let [bound_w, bound_h] = target.bounding_size();
    let [scroll_w, scroll_h] = target.scroll_size();
    target.set_scale(prev);

    let width = if bound_w > 0.0 { bound_w } else { scroll_w };
    let height = if bound_h > 0.0 { bound_h } else { scroll_h };
    NaturalSize::new(width, height)
}
