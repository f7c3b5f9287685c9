use egui::{Color32, FontId, RichText};
use folio_core::content::SkillIcon;
use folio_core::reveal::{Reveal, RevealFrame};

use crate::app::FolioApp;
use crate::panels::nav_bar::download_resume;
use crate::panels::{
    card_frame, probe_rect, reveal_text, section_title, ACCENT, ACCENT_PINK, MUTED, SURFACE, TEXT,
};

const SKILL_CARD_SIZE: egui::Vec2 = egui::vec2(150.0, 84.0);
const CERT_CARD_SIZE: egui::Vec2 = egui::vec2(230.0, 130.0);

/// Current reveal frame for element `id`, checking visibility at the cursor.
fn reveal_at(
    ui: &egui::Ui,
    app: &mut FolioApp,
    id: &str,
    reveal: &Reveal,
    height: f32,
) -> RevealFrame {
    let now = ui.input(|i| i.time);
    let visible = ui.is_rect_visible(probe_rect(ui, height));
    app.ui_state.reveals.frame(id, reveal, now, visible)
}

fn open_link(ui: &egui::Ui, url: &str) {
    ui.ctx().open_url(egui::OpenUrl::new_tab(url));
}

fn link_button(ui: &mut egui::Ui, label: &str, color: Color32, url: &str) {
    let button = egui::Button::new(RichText::new(label).color(color))
        .stroke(egui::Stroke::new(1.0, color))
        .fill(Color32::TRANSPARENT);
    if ui.add(button).on_hover_text(url).clicked() {
        open_link(ui, url);
    }
}

pub fn hero(ui: &mut egui::Ui, app: &mut FolioApp) {
    let min_height = ui.ctx().screen_rect().height() * 0.75;
    ui.set_min_height(min_height);
    ui.add_space(min_height * 0.25);

    let profile = app.config.content.profile.clone();
    ui.vertical_centered(|ui| {
        let frame = reveal_at(ui, app, "hero.title", &Reveal::slide_y(-40.0).with_duration(0.8), 60.0);
        reveal_text(ui, &profile.name, FontId::proportional(52.0), TEXT, frame);

        let frame = reveal_at(ui, app, "hero.tagline", &Reveal::slide_y(10.0).with_delay(0.2), 30.0);
        reveal_text(ui, &profile.tagline, FontId::proportional(22.0), ACCENT, frame);

        let frame = reveal_at(ui, app, "hero.subtitle", &Reveal::fade().with_delay(0.4), 24.0);
        reveal_text(ui, &profile.subtitle, FontId::proportional(16.0), MUTED, frame);

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            // Center the three buttons.
            ui.add_space((ui.available_width() - 330.0).max(0.0) / 2.0);
            let resume = egui::Button::new(RichText::new("\u{2B07} Resume").color(Color32::BLACK))
                .fill(ACCENT);
            if ui.add(resume).clicked() {
                download_resume(ui.ctx(), app);
            }
            link_button(ui, "LinkedIn", ACCENT, &profile.linkedin);
            link_button(ui, "GitHub", ACCENT_PINK, &profile.github);
        });
    });
}

pub fn about(ui: &mut egui::Ui, app: &mut FolioApp) {
    let frame = reveal_at(ui, app, "about.title", &Reveal::slide_y(30.0).with_duration(0.7), 40.0);
    ui.add_space(12.0);
    reveal_text(ui, "About Me", FontId::proportional(28.0), TEXT, frame);
    ui.add_space(8.0);
    ui.label(
        RichText::new(&app.config.content.profile.about)
            .size(16.0)
            .color(MUTED),
    );
}

fn icon_glyph(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => "</>",
        SkillIcon::Server => "\u{2261}",
        SkillIcon::Database => "\u{25A4}",
    }
}

/// Allocate a fixed-size card that grows toward `hover_scale` while hovered.
fn scaled_card(
    ui: &mut egui::Ui,
    app: &mut FolioApp,
    id: &str,
    size: egui::Vec2,
    hover_scale: f32,
) -> egui::Rect {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let hovered = ui.rect_contains_pointer(rect);
    let dt = ui.input(|i| i.stable_dt);
    let scale = app.ui_state.hover_scale(id, hover_scale, hovered, dt);
    let grown = egui::Rect::from_center_size(rect.center(), rect.size() * scale);
    let stroke_color = if hovered { ACCENT } else { SURFACE };
    ui.painter().rect_filled(grown, egui::CornerRadius::same(10), SURFACE);
    ui.painter().rect_stroke(
        grown,
        egui::CornerRadius::same(10),
        egui::Stroke::new(1.0, stroke_color),
        egui::StrokeKind::Inside,
    );
    grown
}

pub fn skills(ui: &mut egui::Ui, app: &mut FolioApp) {
    section_title(ui, "Skills");
    let skills = app.config.content.skills.clone();
    ui.horizontal_wrapped(|ui| {
        for skill in &skills {
            let rect = scaled_card(ui, app, &format!("skill.{}", skill.name), SKILL_CARD_SIZE, 1.03);
            let painter = ui.painter();
            painter.text(
                rect.center() - egui::vec2(0.0, 12.0),
                egui::Align2::CENTER_CENTER,
                icon_glyph(skill.icon),
                FontId::monospace(18.0),
                ACCENT,
            );
            painter.text(
                rect.center() + egui::vec2(0.0, 14.0),
                egui::Align2::CENTER_CENTER,
                &skill.name,
                FontId::proportional(15.0),
                TEXT,
            );
        }
    });
}

pub fn education(ui: &mut egui::Ui, app: &mut FolioApp) {
    section_title(ui, "Education");
    let entries = app.config.content.education.clone();
    for (i, edu) in entries.iter().enumerate() {
        let reveal = Reveal::slide_x(-20.0)
            .with_duration(0.6)
            .with_delay(i as f32 * 0.12);
        let frame = reveal_at(ui, app, &format!("education.{i}"), &reveal, 70.0);
        ui.scope(|ui| {
            ui.set_opacity(frame.opacity);
            ui.horizontal(|ui| {
                // Offset runs from -20 to 0; keep the resting indent at 20.
                ui.add_space(20.0 + frame.offset[0]);
                card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width() - 20.0);
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&edu.degree).size(18.0).strong().color(TEXT));
                            ui.label(RichText::new(&edu.detail).color(MUTED));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new(&edu.year).size(16.0).color(ACCENT));
                        });
                    });
                });
            });
        });
    }
}

pub fn certifications(ui: &mut egui::Ui, app: &mut FolioApp) {
    section_title(ui, "Certifications & Achievements");
    let certs = app.config.content.certifications.clone();
    ui.horizontal_wrapped(|ui| {
        for cert in &certs {
            let rect = scaled_card(ui, app, &format!("cert.{}", cert.title), CERT_CARD_SIZE, 1.02);
            let inner = rect.shrink(14.0);
            let painter = ui.painter();
            painter.text(
                inner.left_top(),
                egui::Align2::LEFT_TOP,
                "\u{2605}",
                FontId::proportional(22.0),
                ACCENT_PINK,
            );
            let title = painter.layout(
                cert.title.clone(),
                FontId::proportional(15.0),
                TEXT,
                inner.width(),
            );
            let title_height = title.size().y;
            painter.galley(inner.left_top() + egui::vec2(0.0, 30.0), title, TEXT);
            painter.text(
                inner.left_top() + egui::vec2(0.0, 36.0 + title_height),
                egui::Align2::LEFT_TOP,
                &cert.issuer,
                FontId::proportional(13.0),
                MUTED,
            );
            painter.text(
                inner.right_bottom(),
                egui::Align2::RIGHT_BOTTOM,
                &cert.year,
                FontId::proportional(12.0),
                ACCENT,
            );
        }
    });
}

pub fn contact(ui: &mut egui::Ui, app: &mut FolioApp) {
    section_title(ui, "Contact Me");
    let profile = &app.config.content.profile;
    ui.label(RichText::new(&profile.contact_blurb).size(16.0).color(MUTED));
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let email = egui::Button::new(RichText::new("\u{2709} Email").color(Color32::BLACK)).fill(ACCENT);
        if ui.add(email).on_hover_text(&profile.email).clicked() {
            open_link(ui, &profile.mailto());
        }
        link_button(ui, "LinkedIn", ACCENT, &profile.linkedin);
        link_button(ui, "GitHub", ACCENT_PINK, &profile.github);
    });
}

pub fn footer(ui: &mut egui::Ui, app: &mut FolioApp) {
    ui.separator();
    ui.horizontal(|ui| {
        let mut picked = None;
        for link in &app.config.content.footer_links {
            if ui.link(RichText::new(&link.label).color(MUTED)).clicked() {
                picked = Some(link.section.clone());
            }
        }
        if picked.is_some() {
            app.ui_state.scroll_target = picked;
        }

        let profile = &app.config.content.profile;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.hyperlink_to("GitHub", &profile.github);
            ui.hyperlink_to("LinkedIn", &profile.linkedin);
        });
    });
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&app.config.content.profile.copyright)
                .small()
                .color(MUTED),
        );
        if let Some(ref status) = app.ui_state.status {
            ui.label(RichText::new(status).small().color(ACCENT_PINK));
        }
    });
    ui.add_space(16.0);
}
