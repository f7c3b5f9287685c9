use egui::RichText;
use folio_core::reveal::Reveal;
use folio_core::selector::DetailView;

use crate::app::FolioApp;
use crate::panels::{card_frame, ACCENT, MUTED, TEXT};

const DETAIL_REVEAL_ID: &str = "project_detail";
const DETAIL_WIDTH: f32 = 520.0;

/// Modal with the active project's detail. Closing it clears the selection.
pub fn show(ctx: &egui::Context, app: &mut FolioApp) {
    let now = ctx.input(|i| i.time);
    let Some(detail) = app.selector.detail() else {
        app.ui_state.reveals.elapsed(DETAIL_REVEAL_ID, now, false);
        return;
    };
    let project = detail.project().clone();
    let demo = match detail {
        DetailView::Embedded { url, .. } => Some(url.to_string()),
        DetailView::Unavailable { .. } => None,
    };

    let reveal = Reveal::zoom(0.95).with_duration(0.2);
    let frame = app.ui_state.reveals.frame(DETAIL_REVEAL_ID, &reveal, now, true);

    let mut close = false;
    let modal = egui::Modal::new(egui::Id::new(DETAIL_REVEAL_ID)).show(ctx, |ui| {
        ui.set_opacity(frame.opacity);
        ui.set_width(DETAIL_WIDTH * frame.scale);

        ui.horizontal(|ui| {
            ui.label(RichText::new(&project.title).size(22.0).strong().color(TEXT));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("\u{2715}").on_hover_text("Close").clicked() {
                    close = true;
                }
            });
        });
        ui.label(RichText::new(&project.description).color(MUTED));
        ui.add_space(12.0);

        card_frame().show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), 220.0));
            ui.centered_and_justified(|ui| match &demo {
                Some(url) => {
                    ui.hyperlink_to(RichText::new(format!("Open demo: {url}")).color(ACCENT), url);
                }
                None => {
                    ui.label(RichText::new("Demo not available").size(16.0).color(MUTED));
                }
            });
        });
    });

    if close || modal.should_close() {
        app.selector.clear();
    }
}
