use crate::app::FolioApp;
use crate::panels::{carousel, sections};

type SectionFn = fn(&mut egui::Ui, &mut FolioApp);

/// Page sections in document order; ids match the navigation targets.
const PAGE: &[(&str, SectionFn)] = &[
    ("hero", sections::hero),
    ("about", sections::about),
    ("skills", sections::skills),
    ("education", sections::education),
    ("projects", carousel::projects),
    ("certifications", sections::certifications),
    ("contact", sections::contact),
];

const MAX_CONTENT_WIDTH: f32 = 1040.0;

/// Draw the scrolling page. Returns the visible page rect, the root the
/// section observer measures against.
pub fn show(ctx: &egui::Context, app: &mut FolioApp) -> egui::Rect {
    egui::CentralPanel::default()
        .show(ctx, |ui| {
            let output = egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let side = ((ui.available_width() - MAX_CONTENT_WIDTH) / 2.0).max(16.0);
                    ui.horizontal(|ui| {
                        ui.add_space(side);
                        ui.vertical(|ui| {
                            ui.set_max_width(MAX_CONTENT_WIDTH.min(ui.available_width() - side));
                            for (id, draw) in PAGE {
                                let rect = ui.scope(|ui| draw(ui, app)).response.rect;
                                app.ui_state.record_section(id, rect);
                                if app.ui_state.scroll_target.as_deref() == Some(*id) {
                                    ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                                    app.ui_state.scroll_target = None;
                                }
                                ui.add_space(48.0);
                            }
                            sections::footer(ui, app);
                        });
                    });
                });
            output.inner_rect
        })
        .inner
}
