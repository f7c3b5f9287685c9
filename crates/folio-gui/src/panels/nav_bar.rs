use egui::RichText;

use crate::app::FolioApp;
use crate::resume;
use crate::panels::{ACCENT, MUTED, NARROW_WIDTH};

pub fn show(ctx: &egui::Context, app: &mut FolioApp) {
    let narrow = ctx.screen_rect().width() < NARROW_WIDTH;
    if !narrow {
        app.ui_state.menu_open = false;
    }

    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let name = RichText::new(&app.config.content.profile.name)
                .size(20.0)
                .strong()
                .color(ACCENT);
            if ui.add(egui::Button::new(name).frame(false)).clicked() {
                app.ui_state.scroll_target = Some("hero".into());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if narrow {
                    if ui.button("\u{2630}").on_hover_text("Open menu").clicked() {
                        app.ui_state.menu_open = !app.ui_state.menu_open;
                    }
                } else {
                    if ui.button("\u{2B07} Resume").clicked() {
                        download_resume(ctx, app);
                    }
                    // Right-to-left layout: add links in reverse to keep page order.
                    for link in app.config.content.navigation.iter().rev() {
                        if nav_link(ui, &link.label, app.tracker.active().is(&link.section)) {
                            app.ui_state.scroll_target = Some(link.section.clone());
                        }
                    }
                }
            });
        });

        if narrow && app.ui_state.menu_open {
            ui.separator();
            ui.vertical(|ui| {
                let mut picked = None;
                for link in &app.config.content.navigation {
                    if nav_link(ui, &link.label, app.tracker.active().is(&link.section)) {
                        picked = Some(link.section.clone());
                    }
                }
                if ui.button("\u{2B07} Resume").clicked() {
                    download_resume(ctx, app);
                    app.ui_state.menu_open = false;
                }
                if let Some(section) = picked {
                    app.ui_state.scroll_target = Some(section);
                    app.ui_state.menu_open = false;
                }
            });
        }
        ui.add_space(6.0);
    });
}

fn nav_link(ui: &mut egui::Ui, label: &str, active: bool) -> bool {
    let color = if active { ACCENT } else { MUTED };
    let text = RichText::new(label).color(color);
    let text = if active { text.underline() } else { text };
    ui.add(egui::Button::new(text).frame(false))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

/// Copy the résumé document to a user-chosen location.
pub fn download_resume(ctx: &egui::Context, app: &mut FolioApp) {
    match resume::locate(&app.asset_root, &app.config.content.profile.resume) {
        Ok(source) => resume::download(ctx, source, app.status_tx.clone()),
        Err(message) => {
            tracing::warn!("{message}");
            app.ui_state.status = Some(message);
        }
    }
}
