//! Stage panel — chrome around the video surface, live badge, session
//! controls. The avatar video itself plays in a DOM `<video>` element
//! behind the canvas; egui renders everything around it.

use egui::{self, Align, Layout, RichText, Vec2};

use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the stage panel
pub enum StageAction {
    None,
    StartSession,
    EndSession,
    PickImage,
}

/// Render the stage panel. Returns an action for the caller to handle.
pub fn stage_panel(ui: &mut egui::Ui, state: &UiState) -> StageAction {
    let mut action = StageAction::None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header with live badge
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("AI Avatar").color(TEXT_PRIMARY).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if state.is_live() {
                            ui.label(RichText::new("● Live").color(SUCCESS).strong());
                        } else if state.is_busy() {
                            ui.label(RichText::new("…").color(WARNING));
                        }
                    });
                });

                ui.separator();

                // Stage area: the DOM video surface sits here; egui only
                // paints the backdrop while nothing is streaming.
                let stage_height = (ui.available_height() - 110.0).max(180.0);
                egui::Frame::default()
                    .fill(STAGE_BG)
                    .corner_radius(PANEL_ROUNDING)
                    .show(ui, |ui| {
                        ui.allocate_ui(Vec2::new(ui.available_width(), stage_height), |ui| {
                            ui.centered_and_justified(|ui| {
                                if !state.is_live() {
                                    let hint = if state.session_requested {
                                        "Connecting..."
                                    } else {
                                        "AI Avatar Ready"
                                    };
                                    ui.label(RichText::new(hint).color(TEXT_SECONDARY).size(18.0));
                                }
                            });
                        });
                    });

                ui.add_space(8.0);

                // Status line
                let status_color = if state.error_banner.is_some() {
                    ERROR
                } else if state.is_busy() {
                    WARNING
                } else {
                    TEXT_PRIMARY
                };
                ui.label(RichText::new(&state.status_text).color(status_color).size(16.0));

                ui.add_space(4.0);

                // Controls
                ui.horizontal(|ui| {
                    if !state.session_requested {
                        let start = ui.add_enabled(
                            !state.is_busy(),
                            egui::Button::new(RichText::new("Start Session").color(TEXT_PRIMARY))
                                .fill(ACCENT),
                        );
                        if start.clicked() {
                            action = StageAction::StartSession;
                        }
                    } else {
                        let share = ui.add_enabled(
                            state.is_live() && !state.is_busy(),
                            egui::Button::new(RichText::new("Share Image").color(TEXT_PRIMARY))
                                .fill(BG_SURFACE),
                        );
                        if share.clicked() {
                            action = StageAction::PickImage;
                        }

                        let end = ui.add(
                            egui::Button::new(RichText::new("End Session").color(TEXT_PRIMARY))
                                .fill(ERROR),
                        );
                        if end.clicked() {
                            action = StageAction::EndSession;
                        }
                    }
                });

                // Error banner
                if let Some(error) = &state.error_banner {
                    ui.add_space(6.0);
                    egui::Frame::default()
                        .fill(BG_SECONDARY)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(error).color(ERROR));
                        });
                }
            });
        });

    action
}
