//! Per-frame viewport reading with change detection.

use eframe::egui;
use overlay_fit::SizeFeed;

/// Reads the host viewport and reports size changes.
///
/// eframe delivers sizes with each frame rather than pushing resize events,
/// so the feed runs in its polling mode; the event-driven side of
/// [`SizeFeed`] stays available for hosts that can push.
pub struct ViewportWatcher {
    feed: SizeFeed,
    fallback_logged: bool,
}

impl ViewportWatcher {
    pub fn new() -> Self {
        Self {
            feed: SizeFeed::polling(),
            fallback_logged: false,
        }
    }

    /// Current viewport size: the window-system inner rect when the backend
    /// reports one, egui's screen rect otherwise.
    pub fn read(&mut self, ctx: &egui::Context) -> [f32; 2] {
        match ctx.input(|i| i.viewport().inner_rect) {
            Some(rect) => [rect.width(), rect.height()],
            None => {
                if !self.fallback_logged {
                    self.fallback_logged = true;
                    log::info!("Window inner rect not reported - using the screen rect");
                }
                let rect = ctx.screen_rect();
                [rect.width(), rect.height()]
            }
        }
    }

    /// Some(size) when the viewport changed since the last frame.
    pub fn changed(&mut self, ctx: &egui::Context) -> Option<[f32; 2]> {
        let current = self.read(ctx);
        self.feed.poll(current)
    }
}
