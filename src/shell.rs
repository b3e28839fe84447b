//! Navigation shell: owns the active page and its panel state.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::classifier::{CannedClassifier, Classifier, ClassifierSession};
use crate::models::Page;

/// Discrete navigation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Navigate(Page),
}

/// The mounted page together with the state only that page owns.
pub enum ActivePage {
    Dashboard,
    MapView,
    ImageClassifier(ClassifierSession),
}

impl ActivePage {
    pub fn page(&self) -> Page {
        match self {
            ActivePage::Dashboard => Page::Dashboard,
            ActivePage::MapView => Page::MapView,
            ActivePage::ImageClassifier(_) => Page::ImageClassifier,
        }
    }
}

/// Dependencies handed to freshly mounted panels.
#[derive(Clone)]
pub struct PanelServices {
    pub handle: Handle,
    pub classifier: Arc<dyn Classifier>,
    pub classify_delay: Duration,
}

impl PanelServices {
    /// Services backed by the canned classifier.
    pub fn canned(handle: Handle, classify_delay: Duration) -> Self {
        Self {
            handle,
            classifier: Arc::new(CannedClassifier),
            classify_delay,
        }
    }
}

/// Holds the current page selection and mounts exactly one panel.
pub struct Shell {
    active: ActivePage,
    services: PanelServices,
}

impl Shell {
    pub fn new(start: Page, services: PanelServices) -> Self {
        let active = mount(start, &services);
        Self { active, services }
    }

    /// Current page selection.
    pub fn page(&self) -> Page {
        self.active.page()
    }

    pub fn active(&self) -> &ActivePage {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActivePage {
        &mut self.active
    }

    /// Apply a navigation event. Returns `true` if a different panel was mounted.
    ///
    /// Re-selecting the current page keeps its state. Switching pages drops the
    /// old panel's state and mounts a fresh one.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        match event {
            NavEvent::Navigate(page) => {
                if page == self.page() {
                    return false;
                }
                tracing::info!(from = %self.page(), to = %page, "Navigating");
                self.active = mount(page, &self.services);
                true
            }
        }
    }

    /// Drive the mounted panel's pending work. Returns `true` if a repaint is needed.
    pub fn poll(&mut self) -> bool {
        match &mut self.active {
            ActivePage::ImageClassifier(session) => session.poll(),
            ActivePage::Dashboard | ActivePage::MapView => false,
        }
    }

    /// Whether the mounted panel is waiting on a timer.
    pub fn is_busy(&self) -> bool {
        match &self.active {
            ActivePage::ImageClassifier(session) => session.pending() > 0,
            ActivePage::Dashboard | ActivePage::MapView => false,
        }
    }
}

fn mount(page: Page, services: &PanelServices) -> ActivePage {
    match page {
        Page::Dashboard => ActivePage::Dashboard,
        Page::MapView => ActivePage::MapView,
        Page::ImageClassifier => ActivePage::ImageClassifier(ClassifierSession::new(
            services.handle.clone(),
            Arc::clone(&services.classifier),
            services.classify_delay,
        )),
    }
}
