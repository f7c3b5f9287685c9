pub mod defaults;
pub mod types;

use serde::{Deserialize, Serialize};

pub use types::{Certification, Education, NavLink, Profile, Project, Skill, SkillIcon};

/// Everything the page renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub navigation: Vec<NavLink>,
    pub footer_links: Vec<NavLink>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: defaults::profile(),
            navigation: defaults::navigation(),
            footer_links: defaults::footer_links(),
            projects: defaults::projects(),
            skills: defaults::skills(),
            education: defaults::education(),
            certifications: defaults::certifications(),
        }
    }
}

impl Portfolio {
    /// Projects without a reachable demo, shown through the detail view.
    pub fn projects_without_demo(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.demo_url().is_none())
    }

    pub fn find_project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title == title)
    }
}
