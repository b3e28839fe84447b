//! Classification request/response seam.

use crate::models::UploadedFile;

/// Result published for every drop, whatever was dropped.
pub const CANNED_LABEL: &str = "Recyclable: Plastic Bottle";

/// Extensions offered by the file picker. Drops are not filtered.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Produces a label for one dropped batch.
///
/// Called from the timer task once the simulated latency has elapsed.
pub trait Classifier: Send + Sync {
    fn classify(&self, files: &[UploadedFile]) -> String;
}

/// Ignores its input and always answers [`CANNED_LABEL`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedClassifier;

impl Classifier for CannedClassifier {
    fn classify(&self, _files: &[UploadedFile]) -> String {
        CANNED_LABEL.to_string()
    }
}
