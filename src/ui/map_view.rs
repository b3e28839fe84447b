//! Route map panel.
//!
//! egui cannot host an HTML frame, so the embed URL is shown as a framed
//! placeholder that opens the map in the system browser.

use eframe::egui::{self, Align2, CursorIcon, FontId, RichText, Sense, Ui, vec2};
use egui_phosphor::regular::{ARROW_SQUARE_OUT, MAP_PIN, MAP_TRIFOLD};

use super::components::{colors, panel_card};
use crate::config::MapConfig;
use crate::models::Page;

const MAX_FRAME_HEIGHT: f32 = 450.0;

/// Show the map panel.
pub fn show(ui: &mut Ui, map: &MapConfig) {
    panel_card(ui, Page::MapView.title(), |ui| {
        let width = ui.available_width();
        let height = (width * 9.0 / 16.0).min(MAX_FRAME_HEIGHT);
        let (rect, response) = ui.allocate_exact_size(vec2(width, height), Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.hovered() {
                colors::SURFACE_HOVER
            } else {
                colors::BACKGROUND
            };
            let painter = ui.painter();
            painter.rect_filled(rect, 8.0, fill);
            painter.text(
                rect.center() - vec2(0.0, 32.0),
                Align2::CENTER_CENTER,
                MAP_TRIFOLD,
                FontId::proportional(64.0),
                colors::ACCENT,
            );
            painter.text(
                rect.center() + vec2(0.0, 24.0),
                Align2::CENTER_CENTER,
                &map.title,
                FontId::proportional(20.0),
                colors::TEXT,
            );
            painter.text(
                rect.center() + vec2(0.0, 52.0),
                Align2::CENTER_CENTER,
                "Click to open the route map in your browser",
                FontId::proportional(13.0),
                colors::TEXT_MUTED,
            );
        }

        if response.on_hover_cursor(CursorIcon::PointingHand).clicked() {
            tracing::info!("Opening route map in browser");
            ui.ctx().open_url(egui::OpenUrl::new_tab(&map.embed_url));
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{MAP_PIN} {}", map.title)).color(colors::TEXT_MUTED));
            ui.add_space(12.0);
            ui.hyperlink_to(format!("{ARROW_SQUARE_OUT} Open in browser"), &map.embed_url);
        });
    });
}
