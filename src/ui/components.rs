//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Stroke, Ui};

/// Dashboard palette.
pub mod colors {
    use super::Color32;

    pub const BACKGROUND: Color32 = Color32::from_rgb(26, 32, 44);
    pub const SURFACE: Color32 = Color32::from_rgb(45, 55, 72);
    pub const SURFACE_HOVER: Color32 = Color32::from_rgb(74, 85, 104);
    pub const BORDER: Color32 = Color32::from_rgb(113, 128, 150);
    pub const GRID: Color32 = Color32::from_rgb(74, 85, 104);
    pub const AXIS: Color32 = Color32::from_rgb(160, 174, 192);
    pub const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(160, 174, 192);
    pub const ACCENT: Color32 = Color32::from_rgb(72, 187, 120);
    pub const RESULT: Color32 = Color32::from_rgb(39, 103, 73);
}

/// Render a header navigation link. Highlighted when `active`.
pub fn nav_link(ui: &mut Ui, icon: &str, label: &str, active: bool) -> Response {
    let (fill, text_color) = if active {
        (colors::BACKGROUND, Color32::WHITE)
    } else {
        (Color32::TRANSPARENT, colors::TEXT_MUTED)
    };

    let button = egui::Button::new(RichText::new(format!("{icon} {label}")).size(14.0).color(text_color))
        .fill(fill)
        .stroke(Stroke::NONE)
        .corner_radius(CornerRadius::same(6));

    ui.add(button).on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Render a panel card with a heading and the given contents.
pub fn panel_card<R>(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .inner_margin(Margin::same(24))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(24.0).strong().color(Color32::WHITE));
            ui.add_space(16.0);
            add_contents(ui)
        })
        .inner
}
