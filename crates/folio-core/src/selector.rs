use tracing::debug;

use crate::content::Project;

/// What the card's Demo button does for a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoAction<'a> {
    /// Open the deployed demo in the system browser.
    OpenExternal(&'a str),
    /// Select the project and show the inline detail view.
    ShowDetail,
}

pub fn demo_action(project: &Project) -> DemoAction<'_> {
    match project.demo_url() {
        Some(url) => DemoAction::OpenExternal(url),
        None => DemoAction::ShowDetail,
    }
}

/// Content of the detail view for the active project.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DetailView<'a> {
    Embedded { project: &'a Project, url: &'a str },
    Unavailable { project: &'a Project },
}

impl<'a> DetailView<'a> {
    pub fn project(&self) -> &'a Project {
        match self {
            Self::Embedded { project, .. } | Self::Unavailable { project } => project,
        }
    }
}

/// Holds at most one project selected for inline detail display.
#[derive(Clone, Debug, Default)]
pub struct ProjectSelector {
    active: Option<Project>,
}

impl ProjectSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `project` the active one, replacing any previous selection.
    pub fn select(&mut self, project: &Project) {
        debug!(project = %project.title, "Project selected");
        self.active = Some(project.clone());
    }

    pub fn clear(&mut self) {
        if let Some(project) = self.active.take() {
            debug!(project = %project.title, "Project detail dismissed");
        }
    }

    pub fn active(&self) -> Option<&Project> {
        self.active.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn detail(&self) -> Option<DetailView<'_>> {
        let project = self.active.as_ref()?;
        Some(match project.demo_url() {
            Some(url) => DetailView::Embedded { project, url },
            None => DetailView::Unavailable { project },
        })
    }
}
