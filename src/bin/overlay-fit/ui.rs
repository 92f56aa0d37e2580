//! UI rendering methods for the overlay viewer.

use crate::OverlayFitApp;
use crate::assets::AssetLoadState;
use eframe::egui;

impl OverlayFitApp {
    /// Handles keyboard shortcuts.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let recalc = ctx.input(|i| i.key_pressed(egui::Key::R));
        if recalc {
            self.recalc(ctx);
        }
    }

    /// Renders the bottom status bar: controls hint, measured size, the
    /// published scale, and the overlay credit.
    pub fn show_status_bar(&mut self, ctx: &egui::Context) {
        let mut recalc_clicked = false;
        let natural = self.scaler.natural();
        let scale = self.scale_var.get();
        let author = self.overlay.author.clone();
        let author_link = self.overlay.author_link.clone();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Resize window: rescale | R: recalculate");
                if ui
                    .button("Recalc")
                    .on_hover_text("Remeasure and rescale (R)")
                    .clicked()
                {
                    recalc_clicked = true;
                }
                ui.separator();
                ui.label(format!(
                    "{:.0}x{:.0} @ {scale:.2}",
                    natural.width, natural.height
                ));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(link) = &author_link {
                        ui.hyperlink_to(author.as_deref().unwrap_or("Overlay author"), link);
                        ui.label("Overlay by:");
                    } else if let Some(author) = &author {
                        ui.label(format!("Overlay by: {author}"));
                    }
                });
            });
        });

        if recalc_clicked {
            self.recalc(ctx);
        }
    }

    /// Renders the central panel containing the scaled overlay.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Errors are also shown via toasts when they occur
            match &self.asset {
                AssetLoadState::Loading(_) => {
                    ui.centered_and_justified(|ui| ui.spinner());
                    return;
                }
                AssetLoadState::Error(msg) => {
                    ui.centered_and_justified(|ui| {
                        ui.label(format!("Failed to load overlay: {msg}"));
                    });
                    return;
                }
                AssetLoadState::Ready(_) => {}
            }

            let Some(texture) = &self.texture else {
                ui.label("Failed to create texture");
                return;
            };
            let texture_id = texture.id();

            let (viewport_rect, _response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

            // Externally defined styling: the published variable is the one
            // input driving the uniform transform
            let scale = self.scale_var.get();
            let natural = self.scaler.natural();
            let display_size = egui::vec2(natural.width, natural.height) * scale;
            let overlay_rect = egui::Rect::from_center_size(viewport_rect.center(), display_size);

            ui.set_clip_rect(viewport_rect);
            ui.painter().image(
                texture_id,
                overlay_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        });
    }
}
