//! Fit-target selection.

use crate::manifest::{Overlay, Region};

/// The element the scaler measures: a named region when one matches the
/// priority list, otherwise the overlay root surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitTarget<'a> {
    Region(&'a Region),
    Root(&'a Overlay),
}

/// Picks the fit target from the overlay's regions.
///
/// Tries each name in `priority` in order and returns the first region with
/// that name. Falls back to the overlay root when nothing matches, so a
/// target always exists and a miss is not an error.
pub fn select_target<'a>(overlay: &'a Overlay, priority: &[&str]) -> FitTarget<'a> {
    for name in priority {
        if let Some(region) = overlay.regions.iter().find(|region| region.name == *name) {
            return FitTarget::Region(region);
        }
    }
    FitTarget::Root(overlay)
}
