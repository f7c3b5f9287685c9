use std::path::PathBuf;
use std::sync::mpsc;

use folio_core::carousel::{self, MeasuredViewport, MountedCarousel};
use folio_core::config::{page_sections, FolioConfig};
use folio_core::frame_loop::FrameLoop;
use folio_core::sections::{GeometryObserver, SectionTracker};
use folio_core::selector::ProjectSelector;

use crate::convert::ThumbnailCache;
use crate::panels;
use crate::state::{to_bounds, UIState};

pub struct FolioApp {
    pub config: FolioConfig,
    pub frames: FrameLoop,
    pub carousel: Option<MountedCarousel<MeasuredViewport>>,
    pub observer: GeometryObserver,
    pub tracker: SectionTracker,
    pub selector: ProjectSelector,
    pub thumbnails: ThumbnailCache,
    /// Directory the résumé and thumbnails resolve against.
    pub asset_root: PathBuf,
    pub ui_state: UIState,
    /// Status lines from background tasks (résumé save).
    pub status_tx: mpsc::Sender<String>,
    status_rx: mpsc::Receiver<String>,
}

impl FolioApp {
    pub fn new(ctx: &egui::Context, config: FolioConfig, asset_root: PathBuf) -> Self {
        panels::apply_theme(ctx);

        let motion = &config.motion;
        let mut frames = FrameLoop::new();
        let mut observer = GeometryObserver::new(motion.ratio_basis);
        let tracker = SectionTracker::mount(
            &mut observer,
            &page_sections(),
            motion.section_threshold,
            Some(motion.initial_section.clone()),
        );

        // No card row to scroll without projects.
        let viewport = (!config.content.projects.is_empty()).then(MeasuredViewport::default);
        let carousel = carousel::mount(&mut frames, viewport, motion.carousel_speed);
        let (status_tx, status_rx) = mpsc::channel();

        Self {
            config,
            frames,
            carousel,
            observer,
            tracker,
            selector: ProjectSelector::new(),
            thumbnails: ThumbnailCache::new(asset_root.clone()),
            asset_root,
            ui_state: UIState::default(),
            status_tx,
            status_rx,
        }
    }

    /// Feed the latest section geometry to the observer.
    fn poll_sections(&mut self, root: egui::Rect) {
        let ui_state = &self.ui_state;
        self.observer
            .poll(to_bounds(root), |id| ui_state.section_bounds(id));
    }

    fn teardown(&mut self) {
        if let Some(carousel) = self.carousel.take() {
            carousel.unmount(&mut self.frames);
        }
        self.tracker.unmount(&mut self.observer);
        self.frames.clear();
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(status) = self.status_rx.try_recv() {
            self.ui_state.status = Some(status);
        }

        // One carousel step per rendered frame.
        self.frames.run_frame();

        panels::nav_bar::show(ctx, self);
        let page_viewport = panels::page::show(ctx, self);
        panels::detail::show(ctx, self);

        self.poll_sections(page_viewport);

        let animating = self.ui_state.take_animating();
        if animating || self.frames.active_tasks() > 0 {
            ctx.request_repaint();
        }
    }
}

impl Drop for FolioApp {
    fn drop(&mut self) {
        self.teardown();
    }
}
