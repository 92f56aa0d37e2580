//! Fit policy: the scale clamp range and viewport floor.

use serde::{Deserialize, Serialize};

/// Default clamp floor; keeps content legible in tiny frames.
pub const DEFAULT_MIN_SCALE: f32 = 0.25;

/// Default clamp ceiling; avoids over-blur at huge scales.
pub const DEFAULT_MAX_SCALE: f32 = 2.0;

/// Viewport dimensions are floored to this before computing ratios.
pub const DEFAULT_VIEWPORT_FLOOR: f32 = 1.0;

/// Tunable policy applied when fitting an overlay into a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitPolicy {
    pub min_scale: f32,
    pub max_scale: f32,
    pub viewport_floor: f32,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            viewport_floor: DEFAULT_VIEWPORT_FLOOR,
        }
    }
}

impl FitPolicy {
    /// Clamps a raw fit ratio into the allowed scale range.
    ///
    /// The floor is applied last, so a reversed range resolves to
    /// `min_scale` and a NaN ratio to one of the bounds; no input panics.
    pub fn clamp(&self, scale: f32) -> f32 {
        scale.min(self.max_scale).max(self.min_scale)
    }

    /// Floors both viewport dimensions so degenerate frames never produce a
    /// zero or negative ratio.
    pub fn floor_viewport(&self, size: [f32; 2]) -> [f32; 2] {
        [
            size[0].max(self.viewport_floor),
            size[1].max(self.viewport_floor),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_matches_policy_constants() {
        let policy = FitPolicy::default();
        assert_eq!(policy.min_scale, 0.25);
        assert_eq!(policy.max_scale, 2.0);
        assert_eq!(policy.viewport_floor, 1.0);
    }

    #[test]
    fn clamp_bounds_are_inclusive() {
        let policy = FitPolicy::default();
        assert_eq!(policy.clamp(10.0), 2.0);
        assert_eq!(policy.clamp(0.01), 0.25);
        assert_eq!(policy.clamp(1.3), 1.3);
    }

    #[test]
    fn reversed_range_resolves_to_the_floor() {
        let policy = FitPolicy {
            min_scale: 3.0,
            max_scale: 2.0,
            ..FitPolicy::default()
        };
        assert_eq!(policy.clamp(1.0), 3.0);
        assert_eq!(policy.clamp(10.0), 3.0);
    }

    #[test]
    fn nan_ratio_clamps_to_a_bound() {
        let policy = FitPolicy::default();
        assert_eq!(policy.clamp(f32::NAN), policy.max_scale);
    }

    #[test]
    fn zero_viewport_is_floored() {
        let policy = FitPolicy::default();
        assert_eq!(policy.floor_viewport([0.0, 0.0]), [1.0, 1.0]);
        assert_eq!(policy.floor_viewport([800.0, 0.5]), [800.0, 1.0]);
    }

    #[test]
    fn deserializes_partial_overrides() {
        let policy: FitPolicy = ron::from_str("(max_scale: 4.0)").unwrap();
        assert_eq!(policy.max_scale, 4.0);
        assert_eq!(policy.min_scale, DEFAULT_MIN_SCALE);
    }
}
