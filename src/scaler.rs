//! The fit scaler: owns the measured natural size and publishes the scale.

use crate::measure::{Measurable, NaturalSize, natural_size};
use crate::policy::FitPolicy;
use crate::style::ScaleVar;

/// Largest uniform scale that fits `natural` into `viewport`, clamped to the
/// policy range. Pure; both ratios are computed against the floored viewport
/// and the smaller one wins so the aspect ratio is preserved.
pub fn fit_scale(natural: NaturalSize, viewport: [f32; 2], policy: &FitPolicy) -> f32 {
    let [view_w, view_h] = policy.floor_viewport(viewport);
    let scale_x = view_w / natural.width;
    let scale_y = view_h / natural.height;
    policy.clamp(scale_x.min(scale_y))
}

/// Keeps an overlay scaled to its host viewport.
///
/// Holds the last measured [`NaturalSize`] between recomputations and writes
/// every computed scale into the shared [`ScaleVar`].
pub struct FitScaler {
    natural: NaturalSize,
    policy: FitPolicy,
    var: ScaleVar,
}

impl FitScaler {
    /// Measures the target once and wires the scaler to the shared variable.
    pub fn new(target: &mut dyn Measurable, policy: FitPolicy, var: ScaleVar) -> Self {
        let natural = natural_size(target);
        log::debug!("natural size: {}x{}", natural.width, natural.height);
        Self {
            natural,
            policy,
            var,
        }
    }

    pub fn natural(&self) -> NaturalSize {
        self.natural
    }

    pub fn policy(&self) -> FitPolicy {
        self.policy
    }

    /// Recomputes the scale for the given viewport and publishes it.
    ///
    /// Idempotent: repeated calls with unchanged inputs publish the same
    /// value, so redundant resize events are harmless.
    pub fn apply_scale(&self, viewport: [f32; 2]) {
        let scale = fit_scale(self.natural, viewport, &self.policy);
        self.var.set(scale);
    }

    /// Re-reads the natural size after a content shift (late image decode,
    /// manifest reload).
    pub fn remeasure(&mut self, target: &mut dyn Measurable) {
        self.natural = natural_size(target);
        log::debug!(
            "remeasured natural size: {}x{}",
            self.natural.width,
            self.natural.height
        );
    }

    /// Manual escape hatch: full remeasure-and-rescale.
    pub fn recalc(&mut self, target: &mut dyn Measurable, viewport: [f32; 2]) {
        self.remeasure(target);
        self.apply_scale(viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTarget([f32; 2]);

    impl Measurable for FixedTarget {
        fn scale(&self) -> f32 {
            1.0
        }

        fn set_scale(&mut self, _scale: f32) {}

        fn bounding_size(&self) -> [f32; 2] {
            self.0
        }

        fn scroll_size(&self) -> [f32; 2] {
            self.0
        }
    }

    fn scaler_for(size: [f32; 2]) -> (FitScaler, ScaleVar) {
        let var = ScaleVar::new();
        let scaler = FitScaler::new(
            &mut FixedTarget(size),
            FitPolicy::default(),
            var.clone(),
        );
        (scaler, var)
    }

    #[test]
    fn wide_viewport_is_limited_by_height() {
        // 400x300 in 800x300: sx = 2.0, sy = 1.0, min wins
        let (scaler, var) = scaler_for([400.0, 300.0]);
        scaler.apply_scale([800.0, 300.0]);
        assert_eq!(var.get(), 1.0);
    }

    #[test]
    fn small_viewport_hits_the_clamp_floor_exactly() {
        // 400x300 in 100x100: sx = 0.25, sy = 0.333.., floor hit exactly
        let (scaler, var) = scaler_for([400.0, 300.0]);
        scaler.apply_scale([100.0, 100.0]);
        assert_eq!(var.get(), 0.25);
    }

    #[test]
    fn huge_viewport_hits_the_clamp_ceiling() {
        let (scaler, var) = scaler_for([100.0, 100.0]);
        scaler.apply_scale([1000.0, 1000.0]);
        assert_eq!(var.get(), 2.0);
    }

    #[test]
    fn apply_is_idempotent_for_unchanged_inputs() {
        let (scaler, var) = scaler_for([400.0, 300.0]);
        scaler.apply_scale([640.0, 480.0]);
        let first = var.get();
        scaler.apply_scale([640.0, 480.0]);
        assert_eq!(var.get(), first);
    }

    #[test]
    fn zero_viewport_is_floored_before_the_ratio() {
        let (scaler, var) = scaler_for([400.0, 300.0]);
        scaler.apply_scale([0.0, 0.0]);
        // 1/400 and 1/300 both clamp to the floor
        assert_eq!(var.get(), 0.25);
    }

    #[test]
    fn fit_scale_matches_the_clamped_min_ratio() {
        let policy = FitPolicy::default();
        let cases: [([f32; 2], [f32; 2]); 4] = [
            ([400.0, 300.0], [800.0, 600.0]),
            ([400.0, 300.0], [320.0, 480.0]),
            ([1920.0, 1080.0], [640.0, 360.0]),
            ([10.0, 10.0], [5000.0, 17.0]),
        ];

        for (natural, viewport) in cases {
            let expected = (viewport[0] / natural[0])
                .min(viewport[1] / natural[1])
                .clamp(policy.min_scale, policy.max_scale);
            let actual = fit_scale(NaturalSize::new(natural[0], natural[1]), viewport, &policy);
            assert_eq!(actual, expected, "natural {natural:?} viewport {viewport:?}");
        }
    }

    #[test]
    fn recalc_picks_up_a_resized_target() {
        let var = ScaleVar::new();
        let mut scaler = FitScaler::new(
            &mut FixedTarget([400.0, 300.0]),
            FitPolicy::default(),
            var.clone(),
        );
        scaler.apply_scale([400.0, 300.0]);
        assert_eq!(var.get(), 1.0);

        // Content shifted: the target doubled
        scaler.recalc(&mut FixedTarget([800.0, 600.0]), [400.0, 300.0]);
        assert_eq!(scaler.natural(), NaturalSize::new(800.0, 600.0));
        assert_eq!(var.get(), 0.5);
    }

    #[test]
    fn custom_policy_overrides_the_clamp_range() {
        let var = ScaleVar::new();
        let policy = FitPolicy {
            min_scale: 0.5,
            max_scale: 4.0,
            ..FitPolicy::default()
        };
        let scaler = FitScaler::new(&mut FixedTarget([100.0, 100.0]), policy, var.clone());

        scaler.apply_scale([1000.0, 1000.0]);
        assert_eq!(var.get(), 4.0);
        scaler.apply_scale([10.0, 10.0]);
        assert_eq!(var.get(), 0.5);
    }
}
