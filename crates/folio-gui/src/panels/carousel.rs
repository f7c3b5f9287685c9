use egui::{FontId, RichText};
use folio_core::carousel::doubled;
use folio_core::content::Project;
use folio_core::selector::{demo_action, DemoAction};

use crate::app::FolioApp;
use crate::panels::{section_title, ACCENT, MUTED, SURFACE, TEXT};

const CARD_SIZE: egui::Vec2 = egui::vec2(290.0, 360.0);
const THUMBNAIL_HEIGHT: f32 = 150.0;
const FLIP_SECS: f32 = 0.35;

/// The projects section: an auto-scrolling row of flip cards.
pub fn projects(ui: &mut egui::Ui, app: &mut FolioApp) {
    section_title(ui, "Projects");

    let Some(scroll_left) = app
        .carousel
        .as_ref()
        .map(|c| c.with_viewport(|v| v.scroll_left()))
    else {
        ui.label(RichText::new("No projects yet").color(MUTED));
        return;
    };

    let projects = app.config.content.projects.clone();
    let output = egui::ScrollArea::horizontal()
        .id_salt("projects_carousel")
        .horizontal_scroll_offset(scroll_left)
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for (slot, project) in doubled(&projects).enumerate() {
                    project_card(ui, app, slot, project);
                }
            });
        });

    if let Some(carousel) = app.carousel.as_ref() {
        carousel.with_viewport_mut(|v| v.set_scroll_width(output.content_size.x));
        carousel.set_hovered(ui.rect_contains_pointer(output.inner_rect));
    }
}

/// One flip card. Hovering turns it over to show the quick links.
fn project_card(ui: &mut egui::Ui, app: &mut FolioApp, slot: usize, project: &Project) {
    let (rect, _) = ui.allocate_exact_size(CARD_SIZE, egui::Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let hovered = ui.rect_contains_pointer(rect);
    let t = ui
        .ctx()
        .animate_bool_with_time(egui::Id::new(("project_card", slot)), hovered, FLIP_SECS);
    // Width squashes to zero at the half-turn, then opens on the other face.
    let squash = (1.0 - 2.0 * t).abs();
    let face = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(rect.width() * squash.max(0.02), rect.height()),
    );
    let back = t >= 0.5;
    let fill = if back { egui::Color32::from_rgb(30, 36, 58) } else { SURFACE };
    ui.painter().rect_filled(face, egui::CornerRadius::same(12), fill);

    if squash < 0.6 {
        return;
    }

    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(face.shrink(14.0))
            .layout(egui::Layout::top_down(egui::Align::Min)),
    );
    child.set_clip_rect(face.intersect(ui.clip_rect()));
    if back {
        card_back(&mut child, app, project);
    } else {
        card_front(&mut child, app, project);
    }
}

fn card_front(ui: &mut egui::Ui, app: &mut FolioApp, project: &Project) {
    let ctx = ui.ctx().clone();
    let thumb_size = egui::vec2(ui.available_width(), THUMBNAIL_HEIGHT);
    match app.thumbnails.get(&ctx, &project.img) {
        Some(texture) => {
            ui.add(egui::Image::new(texture).fit_to_exact_size(thumb_size));
        }
        None => {
            let (tile, _) = ui.allocate_exact_size(thumb_size, egui::Sense::hover());
            ui.painter()
                .rect_filled(tile, egui::CornerRadius::same(8), egui::Color32::from_gray(40));
            ui.painter().text(
                tile.center(),
                egui::Align2::CENTER_CENTER,
                &project.title,
                FontId::proportional(14.0),
                MUTED,
            );
        }
    }

    ui.label(RichText::new(&project.title).size(18.0).strong().color(TEXT));
    ui.label(RichText::new(&project.description).color(MUTED));
    ui.horizontal_wrapped(|ui| {
        for tech in &project.tech {
            egui::Frame::new()
                .fill(egui::Color32::from_rgb(15, 40, 56))
                .corner_radius(egui::CornerRadius::same(6))
                .inner_margin(egui::Margin::symmetric(6, 2))
                .show(ui, |ui| {
                    ui.label(RichText::new(tech).small().color(ACCENT));
                });
        }
    });
}

fn card_back(ui: &mut egui::Ui, app: &mut FolioApp, project: &Project) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&project.title).size(20.0).strong().color(TEXT));
        ui.label(RichText::new("Quick Links").color(MUTED));
        ui.add_space(16.0);

        if ui.button("Repo").on_hover_text(&project.repo).clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(&project.repo));
        }
        if ui.button("\u{2197} Demo").clicked() {
            match demo_action(project) {
                DemoAction::OpenExternal(url) => ui.ctx().open_url(egui::OpenUrl::new_tab(url)),
                DemoAction::ShowDetail => app.selector.select(project),
            }
        }
    });
}
