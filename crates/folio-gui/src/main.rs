mod app;
mod convert;
mod panels;
mod resume;
mod state;

use std::path::PathBuf;

use folio_core::config::FolioConfig;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Optional config path; assets resolve relative to its directory.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, asset_root) = match config_path {
        Some(path) => {
            let config = match FolioConfig::load(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!(path = %path.display(), "Falling back to built-in content: {e}");
                    FolioConfig::default()
                }
            };
            let root = path.parent().map(PathBuf::from).unwrap_or_default();
            (config, root)
        }
        None => (FolioConfig::default(), PathBuf::from("public")),
    };

    let title = config.content.profile.name.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 820.0])
            .with_min_inner_size([420.0, 560.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(app::FolioApp::new(&cc.egui_ctx, config, asset_root)))),
    )
}
