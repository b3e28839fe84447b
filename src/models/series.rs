//! Fixed waste prediction series shown on the dashboard.

/// One labelled point of the prediction chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub value: f64,
}

/// Legend name of the plotted series.
pub const SERIES_NAME: &str = "waste";

const WASTE_SERIES: [SeriesPoint; 7] = [
    SeriesPoint { label: "Jan", value: 4000.0 },
    SeriesPoint { label: "Feb", value: 3000.0 },
    SeriesPoint { label: "Mar", value: 2000.0 },
    SeriesPoint { label: "Apr", value: 2780.0 },
    SeriesPoint { label: "May", value: 1890.0 },
    SeriesPoint { label: "Jun", value: 2390.0 },
    SeriesPoint { label: "Jul", value: 3490.0 },
];

/// Monthly waste prediction, January through July.
pub fn waste_series() -> &'static [SeriesPoint] {
    &WASTE_SERIES
}
