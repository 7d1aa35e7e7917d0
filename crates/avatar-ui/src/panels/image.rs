//! Image preview modal — confirm or cancel sharing the pending image.

use egui::{self, RichText};

use avatar_types::image::PendingImage;

use crate::theme::*;

/// What the caller should do after rendering the preview modal
pub enum ImageAction {
    None,
    Share,
    Cancel,
}

/// Render the preview modal for a pending image. `busy` disables the share
/// button while the describe step runs.
pub fn preview_modal(ctx: &egui::Context, pending: &PendingImage, busy: bool) -> ImageAction {
    let mut action = ImageAction::None;

    egui::Window::new("Share this image?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                // The decoded preview is shown by the DOM <img> overlay;
                // here we identify the file being offered.
                ui.label(RichText::new(&pending.file_name).color(TEXT_PRIMARY).strong());
                ui.label(
                    RichText::new(&pending.media_type)
                        .color(TEXT_SECONDARY)
                        .small(),
                );

                ui.add_space(8.0);
                ui.label(
                    RichText::new("Share this image with the AI avatar?").color(TEXT_SECONDARY),
                );
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let cancel = ui.add(
                        egui::Button::new(RichText::new("Cancel").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE),
                    );
                    if cancel.clicked() {
                        action = ImageAction::Cancel;
                    }

                    let label = if busy { "Analyzing..." } else { "Share Image" };
                    let share = ui.add_enabled(
                        !busy,
                        egui::Button::new(RichText::new(label).color(TEXT_PRIMARY)).fill(ACCENT),
                    );
                    if share.clicked() {
                        action = ImageAction::Share;
                    }
                });
            });
        });

    action
}
