//! The published scale variable.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Shared style variable holding the current published scale factor.
///
/// Clones share one slot, so the scaler writes and rendering code reads the
/// same value. Writes replace the whole value; a reader never observes a
/// partial update. Starts at 1.0.
#[derive(Debug, Clone)]
pub struct ScaleVar(Arc<AtomicU32>);

impl Default for ScaleVar {
    fn default() -> Self {
        Self(Arc::new(AtomicU32::new(1.0f32.to_bits())))
    }
}

impl ScaleVar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, scale: f32) {
        self.0.store(scale.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }
}
