use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{
    CAROUSEL_SPEED_PX_PER_FRAME, INITIAL_SECTION, PAGE_SECTIONS, SECTION_VISIBILITY_THRESHOLD,
};
use crate::content::Portfolio;
use crate::error::{FolioError, Result};
use crate::sections::RatioBasis;

/// Full site configuration: page content plus animation tuning.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub content: Portfolio,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Carousel advance per frame, in pixels.
    #[serde(default = "default_carousel_speed")]
    pub carousel_speed: f32,
    /// Visibility ratio at which a section becomes the active one.
    #[serde(default = "default_section_threshold")]
    pub section_threshold: f32,
    #[serde(default)]
    pub ratio_basis: RatioBasis,
    /// Section highlighted before any visibility notification.
    #[serde(default = "default_initial_section")]
    pub initial_section: String,
}

fn default_carousel_speed() -> f32 {
    CAROUSEL_SPEED_PX_PER_FRAME
}
fn default_section_threshold() -> f32 {
    SECTION_VISIBILITY_THRESHOLD
}
fn default_initial_section() -> String {
    INITIAL_SECTION.to_string()
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            carousel_speed: CAROUSEL_SPEED_PX_PER_FRAME,
            section_threshold: SECTION_VISIBILITY_THRESHOLD,
            ratio_basis: RatioBasis::default(),
            initial_section: INITIAL_SECTION.to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        info!(path = %path.display(), projects = config.content.projects.len(), "Config loaded");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let motion = &self.motion;
        if !motion.carousel_speed.is_finite() || motion.carousel_speed <= 0.0 {
            return Err(FolioError::InvalidConfig(format!(
                "carousel_speed must be a positive number, got {}",
                motion.carousel_speed
            )));
        }
        if !(motion.section_threshold > 0.0 && motion.section_threshold <= 1.0) {
            return Err(FolioError::InvalidConfig(format!(
                "section_threshold must be in (0, 1], got {}",
                motion.section_threshold
            )));
        }
        if !is_page_section(&motion.initial_section) {
            return Err(FolioError::UnknownSection(motion.initial_section.clone()));
        }

        let content = &self.content;
        if content.profile.name.trim().is_empty() {
            return Err(FolioError::InvalidConfig("profile name is empty".into()));
        }
        for link in content.navigation.iter().chain(&content.footer_links) {
            if !is_page_section(&link.section) {
                return Err(FolioError::UnknownSection(link.section.clone()));
            }
        }
        Ok(())
    }
}

pub fn is_page_section(id: &str) -> bool {
    PAGE_SECTIONS.contains(&id)
}

/// Page section ids as owned strings, in document order.
pub fn page_sections() -> Vec<String> {
    PAGE_SECTIONS.iter().map(|s| s.to_string()).collect()
}
