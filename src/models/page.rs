//! Top-level page selection.

/// Page shown by the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    MapView,
    ImageClassifier,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::MapView, Page::ImageClassifier];

    /// Get the display name for the page.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::MapView => "Map View",
            Page::ImageClassifier => "Image Classifier",
        }
    }

    /// Heading shown at the top of the page's panel.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Waste Prediction",
            Page::MapView => "Optimized Route",
            Page::ImageClassifier => "Image Classifier",
        }
    }

    /// Resolve a page from its display name or identifier.
    ///
    /// Matching ignores case and treats spaces, `-` and `_` alike, so
    /// "Map View", "map-view" and "map_view" all select [`Page::MapView`].
    /// Anything unrecognized selects [`Page::Dashboard`].
    pub fn from_name(name: &str) -> Page {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "mapview" => Page::MapView,
            "imageclassifier" => Page::ImageClassifier,
            _ => Page::Dashboard,
        }
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
