//! Image classifier panel: drop zone, thumbnails, and the simulated result.

use eframe::egui::{
    self, Align2, Color32, CornerRadius, CursorIcon, DroppedFile, FontId, Margin, RichText, Sense, Shape, Stroke, Ui,
    pos2, vec2,
};
use egui_phosphor::regular::{RECYCLE, UPLOAD_SIMPLE};

use super::components::{colors, panel_card};
use crate::classifier::{ClassifierSession, ClassifierState, IMAGE_EXTENSIONS};
use crate::models::{Page, PreviewRef, UploadedFile};

const DROP_ZONE_HEIGHT: f32 = 140.0;
const THUMBNAIL_HEIGHT: f32 = 192.0;

/// Show the classifier panel.
pub fn show(ui: &mut Ui, session: &mut ClassifierSession) {
    let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
    let drag_active = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    panel_card(ui, Page::ImageClassifier.title(), |ui| {
        if drop_zone(ui, drag_active).clicked()
            && let Some(paths) = pick_images()
        {
            session.drop_files(paths.into_iter().map(UploadedFile::from_path).collect());
        }

        if !dropped.is_empty() {
            let batch = dropped.iter().map(uploaded_file).collect();
            session.drop_files(batch);
        }

        if !session.files().is_empty() {
            ui.add_space(16.0);
            thumbnails(ui, session.files());
        }

        if let Some(result) = session.result() {
            ui.add_space(16.0);
            result_box(ui, result);
        }

        if session.state() == ClassifierState::AwaitingResult {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Classifying...").color(colors::TEXT_MUTED));
            });
        }
    });
}

/// Dashed drop target. Clicking it opens the file picker.
fn drop_zone(ui: &mut Ui, drag_active: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), DROP_ZONE_HEIGHT), Sense::click());

    if ui.is_rect_visible(rect) {
        let highlighted = drag_active || response.hovered();
        let border = if highlighted { colors::ACCENT } else { colors::BORDER };
        let fill = if drag_active {
            colors::SURFACE_HOVER
        } else {
            Color32::TRANSPARENT
        };

        let painter = ui.painter();
        painter.rect_filled(rect, 8.0, fill);
        let outline = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        painter.extend(Shape::dashed_line(&outline, Stroke::new(2.0, border), 8.0, 6.0));

        painter.text(
            pos2(rect.center().x, rect.center().y - 18.0),
            Align2::CENTER_CENTER,
            UPLOAD_SIMPLE,
            FontId::proportional(32.0),
            border,
        );
        let hint = if drag_active {
            "Drop the files here ..."
        } else {
            "Drag 'n' drop some files here, or click to select files"
        };
        painter.text(
            pos2(rect.center().x, rect.center().y + 22.0),
            Align2::CENTER_CENTER,
            hint,
            FontId::proportional(14.0),
            colors::TEXT_MUTED,
        );
    }

    response.on_hover_cursor(CursorIcon::PointingHand)
}

/// Native multi-file picker filtered to images.
fn pick_images() -> Option<Vec<std::path::PathBuf>> {
    rfd::FileDialog::new()
        .set_title("Select images")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_files()
}

/// Build a preview record from a window drop.
fn uploaded_file(file: &DroppedFile) -> UploadedFile {
    if let Some(path) = &file.path {
        UploadedFile::from_path(path.clone())
    } else if let Some(bytes) = &file.bytes {
        UploadedFile::from_bytes(file.name.clone(), bytes.clone())
    } else {
        UploadedFile::named(file.name.clone())
    }
}

fn thumbnails(ui: &mut Ui, files: &[UploadedFile]) {
    ui.horizontal_wrapped(|ui| {
        for file in files {
            egui::Frame::new()
                .stroke(Stroke::new(2.0, colors::BORDER))
                .inner_margin(Margin::same(8))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    let response = match (&file.preview, file.preview.uri()) {
                        (PreviewRef::Bytes { uri, bytes }, _) => ui.add(
                            egui::Image::from_bytes(uri.clone(), egui::load::Bytes::Shared(bytes.clone()))
                                .max_height(THUMBNAIL_HEIGHT)
                                .corner_radius(4),
                        ),
                        (_, Some(uri)) => ui.add(egui::Image::new(uri).max_height(THUMBNAIL_HEIGHT).corner_radius(4)),
                        (_, None) => {
                            ui.label(RichText::new(format!("{} (no preview)", file.name)).color(colors::TEXT_MUTED))
                        }
                    };
                    response.on_hover_text(format!(
                        "Preview of {} (dropped {})",
                        file.name,
                        file.dropped_at.format("%H:%M:%S")
                    ));
                });
        }
    });
}

fn result_box(ui: &mut Ui, result: &str) {
    egui::Frame::new()
        .fill(colors::RESULT)
        .inner_margin(Margin::same(16))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("{RECYCLE} Classification Result:"))
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.label(RichText::new(result).color(Color32::WHITE));
        });
}
