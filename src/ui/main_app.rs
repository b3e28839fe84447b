//! Main application UI.

use std::time::Duration;

use eframe::egui::{self, Align, Layout, RichText, ScrollArea};
use egui_phosphor::regular::{CHART_LINE, IMAGE, MAP_TRIFOLD, RECYCLE};

use crate::config::AppConfig;
use crate::models::Page;
use crate::shell::{ActivePage, NavEvent, PanelServices, Shell};

use super::components::{colors, nav_link};
use super::{classifier_panel, dashboard, map_view};

/// Repaint interval while a classification timer is pending.
const BUSY_REPAINT: Duration = Duration::from_millis(50);

/// Main application state.
pub struct MainApp {
    // Declared before `rt` so panel tasks are aborted while the runtime is still alive.
    shell: Shell,
    config: AppConfig,
    _rt: tokio::runtime::Runtime,
}

impl MainApp {
    pub fn new(config: AppConfig, start_page: Page, rt: tokio::runtime::Runtime) -> Self {
        let services = PanelServices::canned(rt.handle().clone(), config.classifier_delay());
        let shell = Shell::new(start_page, services);
        tracing::info!(page = %shell.page(), "Shell mounted");

        Self {
            shell,
            config,
            _rt: rt,
        }
    }

    /// Render header with brand and navigation links.
    fn show_header(&self, ctx: &egui::Context) -> Option<NavEvent> {
        let mut event = None;

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(colors::SURFACE)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{RECYCLE} WasteWise"))
                            .size(20.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        // Right-to-left, so iterate in reverse to keep navigation order.
                        for page in Page::ALL.iter().rev() {
                            if nav_link(ui, page_icon(*page), page.name(), self.shell.page() == *page).clicked() {
                                event = Some(NavEvent::Navigate(*page));
                            }
                        }
                    });
                });
            });

        event
    }

    /// Render footer.
    fn show_footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(colors::SURFACE)
                    .inner_margin(egui::Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("© 2025 WasteWise Hackathon. All Rights Reserved.")
                            .size(12.0)
                            .color(colors::TEXT_MUTED),
                    );
                });
            });
    }
}

fn page_icon(page: Page) -> &'static str {
    match page {
        Page::Dashboard => CHART_LINE,
        Page::MapView => MAP_TRIFOLD,
        Page::ImageClassifier => IMAGE,
    }
}

impl eframe::App for MainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll fired classification timers
        if self.shell.poll() {
            ctx.request_repaint();
        }
        if self.shell.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }

        let event = self.show_header(ctx);
        self.show_footer(ctx);

        // Main content
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(colors::BACKGROUND)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match self.shell.active_mut() {
                    ActivePage::Dashboard => dashboard::show(ui),
                    ActivePage::MapView => map_view::show(ui, &self.config.map),
                    ActivePage::ImageClassifier(session) => classifier_panel::show(ui, session),
                });
            });

        if let Some(event) = event {
            // Release cached thumbnails of the classifier session about to be unmounted
            let NavEvent::Navigate(target) = event;
            if target != self.shell.page()
                && let ActivePage::ImageClassifier(session) = self.shell.active()
            {
                for uri in session.preview_uris() {
                    ctx.forget_image(&uri);
                }
            }
            self.shell.apply(event);
        }
    }
}
