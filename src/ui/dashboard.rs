//! Dashboard panel with the waste prediction chart.

use eframe::egui::Ui;

use super::chart::line_chart;
use super::components::panel_card;
use crate::models::{Page, SERIES_NAME, waste_series};

const CHART_HEIGHT: f32 = 400.0;

/// Show the dashboard panel.
pub fn show(ui: &mut Ui) {
    panel_card(ui, Page::Dashboard.title(), |ui| {
        line_chart(ui, waste_series(), SERIES_NAME, CHART_HEIGHT);
    });
}
