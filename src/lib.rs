//! Fit-scaling engine for fixed-layout overlays.
//!
//! Measures an overlay's natural (untransformed) size, computes the largest
//! uniform scale that fits it into the host viewport, and publishes the
//! result through a shared [`ScaleVar`] that rendering code consumes.

pub mod manifest;
pub mod measure;
pub mod observe;
pub mod policy;
pub mod scaler;
pub mod style;
pub mod target;

pub use manifest::{Overlay, Region};
pub use measure::{Measurable, NaturalSize, natural_size};
pub use observe::{EventSource, SizeFeed};
pub use policy::FitPolicy;
pub use scaler::{FitScaler, fit_scale};
pub use style::ScaleVar;
pub use target::{FitTarget, select_target};
