use serde::{Deserialize, Serialize};

use crate::consts::DEMO_PLACEHOLDER;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub repo: String,
    /// Deployed demo address; empty or `#` when there is none.
    #[serde(default)]
    pub demo: String,
    /// Thumbnail image path, relative to the asset root.
    #[serde(default)]
    pub img: String,
}

impl Project {
    /// The demo address, if the project has one worth navigating to.
    pub fn demo_url(&self) -> Option<&str> {
        let demo = self.demo.trim();
        if demo.is_empty() || demo == DEMO_PLACEHOLDER {
            None
        } else {
            Some(demo)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    #[default]
    Code,
    Server,
    Database,
}

impl std::fmt::Display for SkillIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code => write!(f, "Code"),
            Self::Server => write!(f, "Server"),
            Self::Database => write!(f, "Database"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub icon: SkillIcon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub year: String,
    pub degree: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
}

/// A navigation link to a page section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub section: String,
}

impl NavLink {
    /// Link whose section id is the lowercased label.
    pub fn from_label(label: &str) -> Self {
        Self {
            label: label.to_string(),
            section: label.to_lowercase(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub subtitle: String,
    pub about: String,
    /// Downloadable résumé document.
    pub resume: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub contact_blurb: String,
    pub copyright: String,
}

impl Default for Profile {
    fn default() -> Self {
        super::defaults::profile()
    }
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
