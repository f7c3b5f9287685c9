use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Résumé document path under the asset root, if the file exists.
pub fn locate(asset_root: &Path, resume: &str) -> Result<PathBuf, String> {
    let source = asset_root.join(resume.trim_start_matches('/'));
    if source.is_file() {
        Ok(source)
    } else {
        Err(format!("Resume not found at {}", source.display()))
    }
}

/// Copy the résumé to `dest` and describe the outcome for the status line.
pub fn save(source: &Path, dest: &Path) -> String {
    match std::fs::copy(source, dest) {
        Ok(_) => {
            tracing::info!(dest = %dest.display(), "Resume saved");
            format!("Resume saved to {}", dest.display())
        }
        Err(e) => {
            tracing::error!(dest = %dest.display(), "Resume copy failed: {e}");
            format!("Resume copy failed: {e}")
        }
    }
}

/// Ask for a destination off the UI thread, then copy and report back.
pub fn download(ctx: &egui::Context, source: PathBuf, status_tx: mpsc::Sender<String>) {
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".into());
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .set_file_name(&file_name)
            .save_file()
        else {
            return;
        };
        // The UI may already be gone; nothing to report to then.
        let _ = status_tx.send(save(&source, &dest));
        ctx.request_repaint();
    });
}
