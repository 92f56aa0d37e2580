/// Region names tried as the fit target, most specific first. The overlay
/// root is the fallback when none of them exist.
pub const TARGET_PRIORITY: &[&str] = &["body", "slider", "screen"];

/// Initial window size before the first resize arrives.
pub const INITIAL_WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];

/// How long error toasts stay on screen, in seconds.
pub const ERROR_TOAST_SECONDS: f64 = 8.0;
