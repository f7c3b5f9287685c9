use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Decode an image file into an egui ColorImage.
pub fn load_color_image(path: &Path) -> Result<egui::ColorImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}

/// Project thumbnails, decoded once per path.
///
/// Failed decodes are cached as `None` so a missing file is only reported once.
pub struct ThumbnailCache {
    root: PathBuf,
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

impl ThumbnailCache {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            textures: HashMap::new(),
        }
    }

    pub fn get(&mut self, ctx: &egui::Context, rel_path: &str) -> Option<&egui::TextureHandle> {
        if rel_path.is_empty() {
            return None;
        }
        let root = &self.root;
        self.textures
            .entry(rel_path.to_string())
            .or_insert_with(|| {
                let path = root.join(rel_path.trim_start_matches('/'));
                match load_color_image(&path) {
                    Ok(image) => {
                        Some(ctx.load_texture(rel_path, image, egui::TextureOptions::LINEAR))
                    }
                    Err(e) => {
                        tracing::warn!("Thumbnail unavailable: {e:#}");
                        None
                    }
                }
            })
            .as_ref()
    }
}
