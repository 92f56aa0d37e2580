#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod constants;
mod reload;
mod surface;
mod ui;
mod viewport;

use assets::{AssetLoadState, ImageSource, load_and_decode_image, load_overlay};
use clap::{CommandFactory, Parser};
use constants::{ERROR_TOAST_SECONDS, INITIAL_WINDOW_SIZE, TARGET_PRIORITY};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use overlay_fit::{FitPolicy, FitScaler, Overlay, ScaleVar, policy};
use reload::ManifestWatcher;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use surface::OverlaySurface;
use viewport::ViewportWatcher;

/// Scales a fixed-layout overlay to fit the window, preserving aspect ratio.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Overlay manifest (RON) to load instead of the embedded default
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Smallest published scale factor
    #[arg(long, default_value_t = policy::DEFAULT_MIN_SCALE)]
    min_scale: f32,

    /// Largest published scale factor
    #[arg(long, default_value_t = policy::DEFAULT_MAX_SCALE)]
    max_scale: f32,
}

/// Main application state for the overlay viewer.
pub struct OverlayFitApp {
    overlay: Overlay,
    /// Path of the on-disk manifest, when one was requested
    overlay_path: Option<PathBuf>,
    /// Whether `overlay` actually came from `overlay_path`
    from_disk: bool,
    asset: AssetLoadState,
    texture: Option<TextureHandle>,
    image_size: Option<[u32; 2]>,
    scaler: FitScaler,
    scale_var: ScaleVar,
    viewport: ViewportWatcher,
    manifest_watcher: Option<ManifestWatcher>,
    toasts: Toasts,
}

impl OverlayFitApp {
    fn new(cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let overlay_path = args.overlay;
        let (overlay, from_disk) = match load_overlay(overlay_path.as_deref()) {
            Ok(overlay) => (overlay, overlay_path.is_some()),
            Err(err) => {
                toasts.add(Toast {
                    kind: ToastKind::Error,
                    text: err.to_string().into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(ERROR_TOAST_SECONDS)
                        .show_icon(true),
                    ..Default::default()
                });
                // Keep the viewer usable with the embedded default
                (
                    load_overlay(None).unwrap_or_else(|_| Overlay::fallback()),
                    false,
                )
            }
        };

        let policy = FitPolicy {
            min_scale: args.min_scale,
            max_scale: args.max_scale,
            ..FitPolicy::default()
        };

        let scale_var = ScaleVar::new();
        let mut surface = OverlaySurface::new(&overlay, None, TARGET_PRIORITY, scale_var.get());
        let scaler = FitScaler::new(&mut surface, policy, scale_var.clone());

        // Initial publish; the first frame re-applies with the real viewport
        let screen = cc.egui_ctx.screen_rect();
        scaler.apply_scale([screen.width(), screen.height()]);

        let manifest_watcher = overlay_path
            .as_ref()
            .and_then(|path| ManifestWatcher::new(path, cc.egui_ctx.clone()));
        if overlay_path.is_some() && manifest_watcher.is_none() {
            log::info!("Manifest watcher not available - live reload disabled");
        }

        let mut app = Self {
            overlay,
            overlay_path,
            from_disk,
            asset: AssetLoadState::Error("image not loaded".to_owned()),
            texture: None,
            image_size: None,
            scaler,
            scale_var,
            viewport: ViewportWatcher::new(),
            manifest_watcher,
            toasts,
        };
        app.spawn_image_load(&cc.egui_ctx);
        app
    }

    fn error_toast(&mut self, text: String) {
        self.toasts.add(Toast {
            kind: ToastKind::Error,
            text: text.into(),
            options: ToastOptions::default()
                .duration_in_seconds(ERROR_TOAST_SECONDS)
                .show_icon(true),
            ..Default::default()
        });
    }

    fn image_source(&self) -> ImageSource {
        match (&self.overlay_path, self.from_disk) {
            (Some(path), true) => {
                let dir = path.parent().unwrap_or_else(|| std::path::Path::new("."));
                ImageSource::Disk(dir.join(&self.overlay.image_path))
            }
            _ => ImageSource::Embedded(self.overlay.image_path.clone()),
        }
    }

    /// Decodes the overlay image in a background thread.
    fn spawn_image_load(&mut self, ctx: &egui::Context) {
        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();
        let source = self.image_source();

        thread::spawn(move || {
            let result = load_and_decode_image(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });

        self.asset = AssetLoadState::Loading(rx);
        self.texture = None;
        self.image_size = None;
    }

    /// Polls the background decode and creates the texture when it lands.
    ///
    /// A finished decode is a late content shift: the real dimensions are
    /// only known now, so the overlay is remeasured and rescaled.
    fn poll_image(&mut self, ctx: &egui::Context) {
        let mut update: Option<AssetLoadState> = None;
        let mut error: Option<String> = None;

        if let AssetLoadState::Loading(rx) = &self.asset {
            match rx.try_recv() {
                Ok(Ok(decoded)) => update = Some(AssetLoadState::Ready(decoded)),
                Ok(Err(err)) => {
                    let msg = err.to_string();
                    error = Some(msg.clone());
                    update = Some(AssetLoadState::Error(msg));
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    let msg = "image decode channel disconnected".to_owned();
                    error = Some(msg.clone());
                    update = Some(AssetLoadState::Error(msg));
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }

        if let Some(msg) = error {
            self.error_toast(msg);
        }

        let Some(new_state) = update else { return };
        self.asset = new_state;

        if let AssetLoadState::Ready(decoded) = &self.asset {
            let image = ColorImage::from_rgba_unmultiplied(
                [decoded.width as usize, decoded.height as usize],
                &decoded.pixels,
            );
            self.texture = Some(ctx.load_texture("overlay", image, TextureOptions::LINEAR));
            self.image_size = Some([decoded.width, decoded.height]);
            self.recalc(ctx);
        }
    }

    fn surface(&self) -> OverlaySurface {
        OverlaySurface::new(
            &self.overlay,
            self.image_size,
            TARGET_PRIORITY,
            self.scale_var.get(),
        )
    }

    /// Full remeasure-and-rescale. Also wired to the R key and the
    /// status-bar button as the manual escape hatch.
    pub fn recalc(&mut self, ctx: &egui::Context) {
        let viewport = self.viewport.read(ctx);
        let mut surface = self.surface();
        self.scaler.recalc(&mut surface, viewport);
    }

    /// Reloads the manifest after the watcher saw it change.
    fn reload_manifest(&mut self, ctx: &egui::Context) {
        let Some(path) = self.overlay_path.clone() else {
            return;
        };

        match load_overlay(Some(&path)) {
            Ok(overlay) => {
                let image_changed =
                    overlay.image_path != self.overlay.image_path || !self.from_disk;
                self.overlay = overlay;
                self.from_disk = true;
                log::info!("Reloaded overlay manifest: {}", path.display());

                if image_changed {
                    self.spawn_image_load(ctx);
                }
                self.recalc(ctx);
            }
            Err(err) => {
                // Keep the previous overlay; the watcher will fire again
                // once the file is fixed
                self.error_toast(err.to_string());
            }
        }
    }
}

impl eframe::App for OverlayFitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_image(ctx);

        if self
            .manifest_watcher
            .as_mut()
            .is_some_and(|watcher| watcher.poll())
        {
            self.reload_manifest(ctx);
        }

        self.handle_keyboard_input(ctx);

        if let Some(size) = self.viewport.changed(ctx) {
            self.scaler.apply_scale(size);
        }

        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.toasts.show(ctx);
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    if !(args.min_scale > 0.0 && args.max_scale.is_finite() && args.max_scale >= args.min_scale) {
        Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!(
                    "--min-scale ({}) must be positive and no larger than --max-scale ({})",
                    args.min_scale, args.max_scale
                ),
            )
            .exit();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(INITIAL_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Overlay Fit",
        options,
        Box::new(move |cc| Ok(Box::new(OverlayFitApp::new(cc, args)))),
    )
}
