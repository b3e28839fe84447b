//! Data models for navigation, the prediction series, and uploaded files.

pub mod page;
pub mod series;
pub mod upload;

pub use page::Page;
pub use series::{SERIES_NAME, SeriesPoint, waste_series};
pub use upload::{PreviewRef, UploadedFile};
