pub mod carousel;
pub mod detail;
pub mod nav_bar;
pub mod page;
pub mod sections;

use egui::{Color32, FontId, RichText};
use folio_core::reveal::RevealFrame;

pub(crate) const BACKGROUND: Color32 = Color32::from_rgb(11, 14, 24);
pub(crate) const SURFACE: Color32 = Color32::from_rgb(22, 27, 42);
pub(crate) const ACCENT: Color32 = Color32::from_rgb(56, 189, 248);
pub(crate) const ACCENT_PINK: Color32 = Color32::from_rgb(236, 72, 153);
pub(crate) const TEXT: Color32 = Color32::from_rgb(226, 232, 240);
pub(crate) const MUTED: Color32 = Color32::from_rgb(148, 163, 184);

/// Page width at which the nav links collapse into the drawer.
pub(crate) const NARROW_WIDTH: f32 = 760.0;

pub fn apply_theme(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
    ctx.style_mut(|style| {
        style.visuals.panel_fill = BACKGROUND;
        style.visuals.window_fill = SURFACE;
        style.visuals.hyperlink_color = ACCENT;
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    });
}

pub(crate) fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(SURFACE)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(14))
}

pub(crate) fn section_title(ui: &mut egui::Ui, label: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(label).size(28.0).strong().color(TEXT));
    ui.add_space(8.0);
}

/// Paint a single line of text at its reveal position and opacity.
///
/// Space is allocated at the resting position so layout never shifts while
/// the text slides in.
pub(crate) fn reveal_text(ui: &mut egui::Ui, text: &str, font: FontId, color: Color32, frame: RevealFrame) {
    let color = color.gamma_multiply(frame.opacity);
    let galley = ui.painter().layout_no_wrap(text.to_string(), font, color);
    let (rect, _) = ui.allocate_exact_size(galley.size(), egui::Sense::hover());
    let pos = rect.min + egui::vec2(frame.offset[0], frame.offset[1]);
    ui.painter().galley(pos, galley, color);
}

/// Rect the next widget will likely occupy, for in-view checks before layout.
pub(crate) fn probe_rect(ui: &egui::Ui, height: f32) -> egui::Rect {
    egui::Rect::from_min_size(ui.cursor().min, egui::vec2(ui.available_width(), height))
}
